//! Event-driven flows through the application state: routing, debounced
//! search, comments, sharing and reloads.

use blognest::ui::viewmodel::ScreenBody;
use blognest::worker::WorkerMessage;
use blognest::{handle_event, initialize, Action, AppState, Blog, Config, Event, InputMode, Screen, Theme};
use std::time::Duration;

fn state() -> AppState {
    AppState::new(
        vec![
            Blog::new(1, "Cats", "about cats").with_image("https://example.com/cat.png"),
            Blog::new(2, "Dogs", "about dogs"),
            Blog::new(3, "Birds", "all about birds and how they fly south every winter"),
        ],
        Theme::default(),
    )
}

fn send(state: &mut AppState, events: Vec<Event>) -> (bool, Vec<Action>) {
    let mut render = false;
    let mut actions = Vec::new();
    for event in events {
        let (should_render, mut emitted) = handle_event(state, &event).unwrap();
        render |= should_render;
        actions.append(&mut emitted);
    }
    (render, actions)
}

fn type_text(text: &str) -> Vec<Event> {
    text.chars().map(Event::Char).collect()
}

#[test]
fn open_and_return_keeps_cursor_on_the_blog() {
    let mut state = state();
    send(&mut state, vec![Event::KeyDown, Event::KeyDown, Event::OpenSelected]);
    assert_eq!(state.screen, Screen::Detail(3));

    send(&mut state, vec![Event::Back]);
    assert_eq!(state.screen, Screen::List);
    assert_eq!(state.selected_blog().map(|b| b.id), Some(3));
}

#[test]
fn each_visit_counts_a_view() {
    let mut state = state();
    for _ in 0..3 {
        send(&mut state, vec![Event::OpenSelected, Event::Escape]);
    }
    assert_eq!(state.store.get(1).map(|b| b.views), Some(3));
}

#[test]
fn typed_query_waits_for_its_own_timer() {
    let mut state = state();
    let (_, actions) = send(&mut state, [vec![Event::SearchMode], type_text("bi")].concat());

    assert_eq!(
        actions,
        vec![
            Action::ScheduleFilter { delay: Duration::from_millis(300) },
            Action::ScheduleFilter { delay: Duration::from_millis(300) },
        ]
    );
    assert!(state.compute_viewmodel(24, 100).search_bar.is_some_and(|bar| bar.is_pending));

    send(&mut state, vec![Event::FilterTimerElapsed, Event::FilterTimerElapsed]);
    let viewmodel = state.compute_viewmodel(24, 100);
    assert!(viewmodel.header.title.contains("\"bi\" (1 of 3)"), "{}", viewmodel.header.title);
    let ScreenBody::List(list) = viewmodel.body else {
        panic!("expected list body");
    };
    assert_eq!(list.items.iter().map(|item| item.id).collect::<Vec<_>>(), vec![3]);
    assert_eq!(list.items[0].highlight_ranges, vec![(0, 2)]);
}

#[test]
fn configured_delay_reaches_scheduled_timers() {
    let config = Config {
        search_debounce_ms: 50,
        ..Config::default()
    };
    let mut state = initialize(&config);

    let (_, actions) = send(&mut state, vec![Event::SearchMode, Event::Char('x')]);
    assert_eq!(actions, vec![Action::ScheduleFilter { delay: Duration::from_millis(50) }]);
}

#[test]
fn unmatched_query_shows_empty_state_until_cleared() {
    let mut state = state();
    send(&mut state, [vec![Event::SearchMode], type_text("parrot"), vec![Event::Submit]].concat());

    let ScreenBody::Empty(empty) = state.compute_viewmodel(24, 100).body else {
        panic!("expected empty state");
    };
    assert!(empty.message.contains("parrot"));
    assert!(state.selected_blog().is_none());

    send(&mut state, vec![Event::Escape]);
    assert_eq!(state.store.len(), 3);
    assert!(state.search_query.is_empty());
}

#[test]
fn list_rows_carry_excerpt_and_counters() {
    let mut state = state();
    state.settings.excerpt_len = 9;
    send(&mut state, vec![Event::LikeSelected, Event::LikeSelected]);

    let ScreenBody::List(list) = state.compute_viewmodel(24, 120).body else {
        panic!("expected list body");
    };
    assert_eq!(list.items[0].likes, 2);
    assert_eq!(list.items[2].excerpt, "all about...");
    assert!(list.items[0].is_selected);
}

#[test]
fn detail_page_comment_round_trip() {
    let mut state = state();
    send(&mut state, vec![Event::OpenSelected, Event::ComposeComment]);
    send(&mut state, type_text("first"));

    let ScreenBody::Detail(detail) = state.compute_viewmodel(30, 80).body else {
        panic!("expected detail body");
    };
    assert_eq!(detail.input.map(|input| input.text), Some("first".to_string()));
    assert_eq!(detail.image_url, "https://example.com/cat.png");

    send(&mut state, vec![Event::Submit, Event::ComposeComment]);
    send(&mut state, [type_text("second"), vec![Event::Submit]].concat());
    assert_eq!(state.comment_index, 1);

    send(&mut state, vec![Event::KeyUp, Event::EditSelectedComment]);
    assert_eq!(state.input_mode, InputMode::EditComment(0));
    assert_eq!(state.draft, "first");
    send(&mut state, [vec![Event::Char('!')], vec![Event::Submit]].concat());

    send(&mut state, vec![Event::KeyDown, Event::DeleteSelectedComment]);
    assert_eq!(state.store.get(1).map(|b| b.comments.clone()), Some(vec!["first!".to_string()]));
    assert_eq!(state.comment_index, 0);
}

#[test]
fn escape_discards_draft() {
    let mut state = state();
    send(&mut state, [vec![Event::OpenSelected, Event::ComposeComment], type_text("nope"), vec![Event::Escape]].concat());

    assert_eq!(state.input_mode, InputMode::Normal);
    assert_eq!(state.screen, Screen::Detail(1));
    assert!(state.store.get(1).is_some_and(|b| b.comments.is_empty()));
}

#[test]
fn share_modal_shows_link_and_closes() {
    let mut state = state();
    state.settings.base_url = "https://blog.example.com/".to_string();
    send(&mut state, vec![Event::KeyDown, Event::OpenSelected, Event::OpenShare]);

    let modal = state.compute_viewmodel(24, 80).share_modal.expect("modal open");
    assert_eq!(modal.title, "Dogs");
    assert_eq!(modal.url, "https://blog.example.com/blog/2");

    let (render, _) = send(&mut state, vec![Event::Escape]);
    assert!(render);
    assert!(state.share.is_none());
    assert_eq!(state.screen, Screen::Detail(2), "escape closes only the modal");
}

#[test]
fn copying_link_reports_on_status_line() {
    let mut state = state();
    let (_, actions) = send(&mut state, vec![Event::OpenShare, Event::CopyShareLink]);

    assert_eq!(
        actions,
        vec![Action::CopyToClipboard {
            text: "http://localhost:3000/blog/1".to_string()
        }]
    );
    let status = state.compute_viewmodel(24, 80).status.unwrap();
    assert!(status.ends_with("Blog URL copied to clipboard!"));
}

#[test]
fn reload_asks_worker_for_configured_file() {
    let config = Config {
        blogs_file: Some("/host/blogs.json".to_string()),
        ..Config::default()
    };
    let mut state = initialize(&config);
    assert!(matches!(state.compute_viewmodel(24, 80).body, ScreenBody::Empty(_)));

    let (_, actions) = send(&mut state, vec![Event::Reload]);
    assert!(matches!(
        actions.as_slice(),
        [Action::PostToWorker(WorkerMessage::LoadBlogs { path: Some(path), .. })] if path == "/host/blogs.json"
    ));
}

#[test]
fn quit_closes_focus_without_render() {
    let mut state = state();
    let (render, actions) = send(&mut state, vec![Event::CloseFocus]);
    assert!(!render);
    assert_eq!(actions, vec![Action::CloseFocus]);
}
