use claims::*;
use std::cell::RefCell;
use std::rc::Rc;
use windowing::textbox::{TextInputBackend, TextInputSession};
use windowing::{
    ScreenCoords, ScreenRect, ScreenSize, Widget, WidgetIndex, WidgetType, Window, WindowClass,
    WindowHandler, WindowIdentity, WindowManager, WindowState,
};

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Text(WindowIdentity, WidgetIndex, Option<String>),
    BackendStart(String, usize),
    BackendStop,
}

type Log = Rc<RefCell<Vec<Event>>>;

struct Editor {
    log: Log,
}

impl WindowHandler for Editor {
    fn on_text_input(
        &mut self,
        window: &mut WindowState,
        widget_index: WidgetIndex,
        text: Option<&str>,
    ) {
        self.log
            .borrow_mut()
            .push(Event::Text(window.identity(), widget_index, text.map(str::to_string)));
    }
}

struct RecordingBackend {
    log: Log,
}

impl TextInputBackend for RecordingBackend {
    fn start(&mut self, initial_text: &str, max_length: usize) {
        self.log
            .borrow_mut()
            .push(Event::BackendStart(initial_text.to_string(), max_length));
    }

    fn stop(&mut self) {
        self.log.borrow_mut().push(Event::BackendStop);
    }
}

fn editor_window(class: WindowClass, x: i32, log: &Log) -> Window {
    Window::new(class, 0, ScreenCoords::new(x, 0), ScreenSize::new(100, 60))
        .with_widgets(vec![
            Widget::new(WidgetType::Frame, 0, 0, 99, 59),
            Widget::new(WidgetType::TextBox, 5, 20, 94, 31),
        ])
        .with_handler(Editor { log: log.clone() })
}

fn setup() -> (WindowManager, TextInputSession, Log, WindowIdentity, WindowIdentity) {
    let log: Log = Rc::default();
    let mut windows = WindowManager::new(ScreenSize::new(640, 480));
    let first = assert_ok!(windows.insert(editor_window(WindowClass::Banner, 0, &log)));
    let second = assert_ok!(windows.insert(editor_window(WindowClass::ServerList, 200, &log)));
    let session = TextInputSession::new(Box::new(RecordingBackend { log: log.clone() }));
    (windows, session, log, first, second)
}

#[test]
fn test_start_truncates_initial_text_and_starts_backend() {
    let (mut windows, mut session, log, first, _) = setup();

    session.start(&mut windows, first, 1, "Merry-go-round", 5);

    assert!(session.is_active());
    assert!(session.is_widget_active(first, 1));
    assert_eq!(session.text(), "Merry");
    assert_eq!(*log.borrow(), vec![Event::BackendStart("Merry".to_string(), 5)]);
}

#[test]
fn test_second_session_cancels_first_exactly_once() {
    let (mut windows, mut session, log, first, second) = setup();
    session.start(&mut windows, first, 1, "Banner", 32);
    log.borrow_mut().clear();

    session.start(&mut windows, second, 1, "Server", 32);

    assert_eq!(
        *log.borrow(),
        vec![
            Event::Text(first, 1, None),
            Event::BackendStop,
            Event::BackendStart("Server".to_string(), 32),
        ]
    );
    assert!(session.is_widget_active(second, 1));
    assert!(!session.is_widget_active(first, 1));
    assert_eq!(session.text(), "Server");
}

#[test]
fn test_cancel_is_idempotent() {
    let (mut windows, mut session, log, first, _) = setup();
    session.cancel(&mut windows);
    assert!(log.borrow().is_empty());

    session.start(&mut windows, first, 1, "", 10);
    session.cancel(&mut windows);
    session.cancel(&mut windows);

    let cancels = log
        .borrow()
        .iter()
        .filter(|event| matches!(event, Event::Text(_, _, None)))
        .count();
    assert_eq!(cancels, 1);
    assert!(!session.is_active());
    assert_none!(session.owner());
    assert_none!(session.widget_index());
}

#[test]
fn test_cancel_after_owner_closed_still_stops_backend() {
    let (mut windows, mut session, log, first, _) = setup();
    session.start(&mut windows, first, 1, "Banner", 32);
    assert!(windows.close(first));
    log.borrow_mut().clear();
    windows.take_dirty();

    session.cancel(&mut windows);

    assert_eq!(*log.borrow(), vec![Event::BackendStop]);
    assert!(windows.dirty().is_empty());
    assert!(!session.is_active());
}

#[test]
fn test_cancel_redraws_the_old_widget() {
    let (mut windows, mut session, _log, _, second) = setup();
    session.start(&mut windows, second, 1, "Server", 32);
    windows.take_dirty();

    session.cancel(&mut windows);

    assert!(windows.dirty().covers(&ScreenRect::new(205, 20, 295, 32)));
}

#[test]
fn test_update_forwards_buffer_and_resets_caret() {
    let (mut windows, mut session, log, first, _) = setup();
    session.start(&mut windows, first, 1, "", 8);
    for _ in 0..20 {
        session.update_caret();
    }
    assert!(!session.caret_visible());
    log.borrow_mut().clear();

    session.set_text("Lemonade stall");
    session.update(&mut windows);

    assert!(session.caret_visible());
    assert_eq!(session.caret_frame(), 0);
    assert_eq!(*log.borrow(), vec![Event::Text(first, 1, Some("Lemonade".to_string()))]);
}

#[test]
fn test_start_closes_text_input_dialog() {
    let (mut windows, mut session, _log, first, _) = setup();
    assert_ok!(windows.insert(Window::new(
        WindowClass::TextInput,
        0,
        ScreenCoords::new(100, 100),
        ScreenSize::new(200, 100),
    )));

    session.start(&mut windows, first, 1, "", 8);

    assert_none!(windows.find_by_class(WindowClass::TextInput));
}
