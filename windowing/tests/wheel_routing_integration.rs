use claims::*;
use std::cell::RefCell;
use std::rc::Rc;
use windowing::scroll::{ScrollArea, ScrollFlags, init_scroll_widgets};
use windowing::wheel::{
    CursorState, MouseWheelRouter, WheelOutcome, route_wheel_to_spinner_group,
};
use windowing::widget::ScrollAxes;
use windowing::{
    ImageId, ScreenCoords, ScreenFlags, ScreenSize, StringId, Viewport, Widget, WidgetIndex,
    WidgetType, Window, WindowClass, WindowFlags, WindowHandler, WindowIdentity, WindowManager,
    WindowState,
};

mod helpers {
    use super::*;

    #[derive(Default)]
    pub struct Recorder {
        pub mouse_downs: Rc<RefCell<Vec<WidgetIndex>>>,
        pub content: ScreenSize,
    }

    impl WindowHandler for Recorder {
        fn on_mouse_down(&mut self, _window: &mut WindowState, widget_index: WidgetIndex) {
            self.mouse_downs.borrow_mut().push(widget_index);
        }

        fn on_scroll_get_size(&mut self, _: &WindowState, _: usize) -> ScreenSize {
            self.content
        }
    }

    pub fn manager() -> WindowManager {
        WindowManager::new(ScreenSize::new(640, 480))
    }

    pub fn main_window() -> Window {
        Window::new(
            WindowClass::MainWindow,
            0,
            ScreenCoords::new(0, 0),
            ScreenSize::new(640, 480),
        )
        .with_flags(WindowFlags::STICK_TO_BACK)
        .with_viewport(Viewport::new(ScreenCoords::new(0, 0), ScreenSize::new(640, 480)))
    }

    /// Land tool style group: image button, then decrease and increase.
    pub fn land_tool_window(downs: Rc<RefCell<Vec<WidgetIndex>>>) -> Window {
        Window::new(WindowClass::Land, 0, ScreenCoords::new(100, 100), ScreenSize::new(98, 94))
            .with_widgets(vec![
                Widget::new(WidgetType::Frame, 0, 0, 97, 93),
                Widget::new(WidgetType::ImgBtn, 27, 17, 70, 48),
                Widget::new(WidgetType::TrnBtn, 28, 18, 43, 33)
                    .with_image(ImageId::LAND_TOOL_DECREASE),
                Widget::new(WidgetType::TrnBtn, 54, 32, 69, 47)
                    .with_image(ImageId::LAND_TOOL_INCREASE),
            ])
            .with_handler(Recorder {
                mouse_downs: downs,
                content: ScreenSize::default(),
            })
    }

    /// Numeric spinner: value field, then up and down buttons.
    pub fn spinner_window(downs: Rc<RefCell<Vec<WidgetIndex>>>, disable_up: bool) -> Window {
        let mut up =
            Widget::new(WidgetType::Button, 70, 20, 80, 25).with_text(StringId::NUMERIC_UP);
        up.set_disabled(disable_up);
        Window::new(WindowClass::Options, 0, ScreenCoords::new(300, 100), ScreenSize::new(100, 60))
            .with_widgets(vec![
                Widget::new(WidgetType::Frame, 0, 0, 99, 59),
                Widget::new(WidgetType::Spinner, 10, 20, 81, 31),
                up,
                Widget::new(WidgetType::Button, 70, 26, 80, 30).with_text(StringId::NUMERIC_DOWN),
            ])
            .with_handler(Recorder {
                mouse_downs: downs,
                content: ScreenSize::default(),
            })
    }

    pub fn list_window(content: ScreenSize) -> Window {
        let mut window = Window::new(
            WindowClass::RideList,
            0,
            ScreenCoords::new(0, 200),
            ScreenSize::new(300, 200),
        )
        .with_widgets(vec![
            Widget::new(WidgetType::Frame, 0, 0, 299, 199),
            Widget::scroll(5, 20, 104, 119, ScrollAxes::VERTICAL),
            Widget::new(WidgetType::Button, 120, 20, 200, 31),
            Widget::scroll(120, 40, 219, 139, ScrollAxes::VERTICAL),
        ])
        .with_handler(Recorder {
            mouse_downs: Rc::default(),
            content,
        });
        init_scroll_widgets(&mut window);
        window
    }
}

use helpers::*;

#[test]
fn test_wheel_over_main_window_zooms_viewport() {
    let mut windows = manager();
    let main = assert_ok!(windows.insert(main_window()));
    let mut router = MouseWheelRouter::new();

    let outcome = router.process(
        &mut windows,
        CursorState {
            position: ScreenCoords::new(10, 10),
            wheel: 1,
        },
    );
    assert_eq!(outcome, WheelOutcome::ViewportZoom(main));
    assert_eq!(assert_some!(assert_some!(windows.get(main)).viewport).zoom, 1);

    router.process(
        &mut windows,
        CursorState {
            position: ScreenCoords::new(10, 10),
            wheel: 0,
        },
    );
    assert_eq!(assert_some!(assert_some!(windows.get(main)).viewport).zoom, 0);
}

#[test]
fn test_viewport_zoom_suppressed_on_title_screen() {
    let mut windows = manager();
    let main = assert_ok!(windows.insert(main_window()));
    windows.set_screen_flags(ScreenFlags::TITLE_DEMO);
    let mut router = MouseWheelRouter::new();

    let outcome = router.process(
        &mut windows,
        CursorState {
            position: ScreenCoords::new(10, 10),
            wheel: 2,
        },
    );
    assert_eq!(outcome, WheelOutcome::ViewportZoom(main));
    assert_eq!(assert_some!(assert_some!(windows.get(main)).viewport).zoom, 0);
}

#[test]
fn test_unchanged_wheel_and_locked_input_are_ignored() {
    let mut windows = manager();
    assert_ok!(windows.insert(main_window()));
    let mut router = MouseWheelRouter::new();
    let cursor = CursorState {
        position: ScreenCoords::new(10, 10),
        wheel: 0,
    };
    assert_eq!(router.process(&mut windows, cursor), WheelOutcome::Ignored);

    windows.set_input_locked(true);
    let moved = CursorState { wheel: 3, ..cursor };
    assert_eq!(router.process(&mut windows, moved), WheelOutcome::Ignored);

    // The movement made while locked is not replayed after unlocking.
    windows.set_input_locked(false);
    assert_eq!(router.process(&mut windows, moved), WheelOutcome::Ignored);
}

#[test]
fn test_wheel_over_scroll_widget_scrolls_it() {
    let mut windows = manager();
    let list = assert_ok!(windows.insert(list_window(ScreenSize::new(0, 1000))));
    let mut router = MouseWheelRouter::new();

    let outcome = router.process(
        &mut windows,
        CursorState {
            position: ScreenCoords::new(150, 280),
            wheel: 2,
        },
    );

    assert_eq!(outcome, WheelOutcome::Scrolled(list));
    let window = assert_some!(windows.get(list));
    assert_eq!(window.scrolls()[0].v_top, 0);
    assert_eq!(window.scrolls()[1].v_top, 34);
}

#[test]
fn test_extreme_wheel_counters_saturate_and_wrap() {
    let mut windows = manager();
    let list = assert_ok!(windows.insert(list_window(ScreenSize::new(0, 1000))));
    let mut router = MouseWheelRouter::new();
    let over_first_list = |wheel| CursorState {
        position: ScreenCoords::new(50, 250),
        wheel,
    };

    router.process(&mut windows, over_first_list(i32::MAX));
    assert_eq!(assert_some!(windows.get(list)).scrolls()[0].v_top, 903);

    // MIN follows MAX as a single step down
    let outcome = router.process(&mut windows, over_first_list(i32::MIN));
    assert_eq!(outcome, WheelOutcome::Scrolled(list));
    assert_eq!(assert_some!(windows.get(list)).scrolls()[0].v_top, 903);

    router.process(&mut windows, over_first_list(i32::MAX));
    assert_eq!(assert_some!(windows.get(list)).scrolls()[0].v_top, 886);
}

#[test]
fn test_wheel_over_plain_widget_falls_back_to_first_scrollbar() {
    let mut windows = manager();
    let list = assert_ok!(windows.insert(list_window(ScreenSize::new(0, 1000))));
    let mut router = MouseWheelRouter::new();

    // Over the plain button, which is nearer the second list.
    let outcome = router.process(
        &mut windows,
        CursorState {
            position: ScreenCoords::new(150, 225),
            wheel: 1,
        },
    );

    assert_eq!(outcome, WheelOutcome::Scrolled(list));
    let window = assert_some!(windows.get(list));
    assert_eq!(window.scrolls()[0].v_top, 17);
    assert_eq!(window.scrolls()[1].v_top, 0);
}

#[test]
fn test_image_button_group_maps_wheel_up_to_increase() {
    let downs = Rc::new(RefCell::new(Vec::new()));
    let mut window = land_tool_window(downs.clone());

    assert_eq!(route_wheel_to_spinner_group(&mut window, 1, -17), Some(3));
    assert_eq!(route_wheel_to_spinner_group(&mut window, 1, 17), Some(2));
    // Hovering either button still finds the group.
    assert_eq!(route_wheel_to_spinner_group(&mut window, 2, -17), Some(3));
    assert_eq!(route_wheel_to_spinner_group(&mut window, 3, 17), Some(2));
    assert_eq!(*downs.borrow(), vec![3, 2, 3, 2]);
}

#[test]
fn test_text_spinner_maps_wheel_up_to_first_button() {
    let downs = Rc::new(RefCell::new(Vec::new()));
    let mut window = spinner_window(downs.clone(), false);

    assert_eq!(route_wheel_to_spinner_group(&mut window, 1, -17), Some(2));
    assert_eq!(route_wheel_to_spinner_group(&mut window, 3, 17), Some(3));
    assert_eq!(*downs.borrow(), vec![2, 3]);
}

#[test]
fn test_disabled_spinner_button_is_not_pressed() {
    let downs = Rc::new(RefCell::new(Vec::new()));
    let mut window = spinner_window(downs.clone(), true);

    assert_none!(route_wheel_to_spinner_group(&mut window, 1, -17));
    assert_eq!(route_wheel_to_spinner_group(&mut window, 1, 17), Some(3));
    assert_eq!(*downs.borrow(), vec![3]);
}

#[test]
fn test_unrecognised_widgets_are_not_groups() {
    let downs = Rc::new(RefCell::new(Vec::new()));
    let mut window = spinner_window(downs.clone(), false);
    // The frame is not a button, spinner or image button.
    assert_none!(route_wheel_to_spinner_group(&mut window, 0, -17));

    window.widgets_mut()[2].content = windowing::WidgetContent::Text(StringId(42));
    assert_none!(route_wheel_to_spinner_group(&mut window, 1, -17));
    assert!(downs.borrow().is_empty());
}

#[test]
fn test_wheel_over_spinner_presses_button_through_router() {
    let downs = Rc::new(RefCell::new(Vec::new()));
    let mut windows = manager();
    let options = assert_ok!(windows.insert(spinner_window(downs.clone(), false)));
    let mut router = MouseWheelRouter::new();

    let outcome = router.process(
        &mut windows,
        CursorState {
            position: ScreenCoords::new(320, 125),
            wheel: -1,
        },
    );
    assert_eq!(
        outcome,
        WheelOutcome::SpinnerPressed {
            window: options,
            widget_index: 2
        }
    );
    assert_eq!(*downs.borrow(), vec![2]);
}

#[test]
fn test_hidden_scrollbars_are_not_scrolled() {
    let mut windows = manager();
    let list = assert_ok!(windows.insert(list_window(ScreenSize::new(0, 1000))));
    {
        let window = assert_some!(windows.get_mut(list));
        for scroll in window.scrolls_mut() {
            *scroll = ScrollArea {
                flags: ScrollFlags::empty(),
                ..*scroll
            };
        }
    }
    let mut router = MouseWheelRouter::new();
    let outcome = router.process(
        &mut windows,
        CursorState {
            position: ScreenCoords::new(150, 280),
            wheel: 1,
        },
    );
    assert_eq!(outcome, WheelOutcome::Ignored);
    assert_eq!(
        windows.get(WindowIdentity::new(WindowClass::RideList, 0)).map(|w| w.scrolls()[1].v_top),
        Some(0)
    );
}
