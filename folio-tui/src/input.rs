//! Keyboard input dispatch - global keys → page state → focused control.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use folio_core::FormPhase;

use crate::app::{AppState, Focus, SCROLL_STEP_PX};

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // 1. Global keys (always available).
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
            app.running = false;
            return;
        }
        KeyCode::Char('t') if ctrl => {
            app.toggle_theme();
            return;
        }
        KeyCode::F(2) => {
            app.page.toggle_menu();
            return;
        }
        KeyCode::PageDown => {
            app.scroll_by(SCROLL_STEP_PX);
            return;
        }
        KeyCode::PageUp => {
            app.scroll_by(-SCROLL_STEP_PX);
            return;
        }
        KeyCode::Esc if app.page.menu_open => {
            app.page.close_menu();
            return;
        }
        _ => {}
    }

    // 2. Form phase gates the rest.
    match app.form.phase() {
        FormPhase::Submitting => {}
        FormPhase::Submitted => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('s')) {
                app.send_another();
            }
        }
        FormPhase::Editing => handle_form_key(app, key),
    }
}

fn handle_form_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return;
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return;
        }
        _ => {}
    }

    match app.focus {
        Focus::Name | Focus::Email | Focus::Message => handle_text_key(app, key),
        Focus::Service => handle_service_key(app, key),
        Focus::Budget => match key.code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => app.budget_up(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => app.budget_down(),
            KeyCode::Enter => app.focus = app.focus.next(),
            _ => {}
        },
        Focus::Submit => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                app.submit();
            }
        }
    }
}

fn handle_text_key(app: &mut AppState, key: KeyEvent) {
    let focus = app.focus;
    let field = match focus {
        Focus::Name => &mut app.form.name,
        Focus::Email => &mut app.form.email,
        Focus::Message => &mut app.form.message,
        _ => return,
    };

    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => field.push(c),
        KeyCode::Backspace => {
            field.pop();
        }
        KeyCode::Enter if focus == Focus::Message && key.modifiers.contains(KeyModifiers::ALT) => {
            field.push('\n');
        }
        KeyCode::Enter | KeyCode::Down => app.focus = focus.next(),
        KeyCode::Up => app.focus = focus.prev(),
        _ => {}
    }
}

fn handle_service_key(app: &mut AppState, key: KeyEvent) {
    let count = app.site.services.len();
    if count == 0 {
        if key.code == KeyCode::Enter {
            app.focus = app.focus.next();
        }
        return;
    }

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            app.service_cursor = (app.service_cursor + 1) % count;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.service_cursor = (app.service_cursor + count - 1) % count;
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.select_service_at(app.service_cursor);
            app.focus = app.focus.next();
        }
        _ => {}
    }
}
