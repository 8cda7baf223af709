//! Rendering through ratatui's `TestBackend`

use crate::common::{app_with_shortcuts, press, press_cmd, type_str};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::KeyCode;

fn screen(app: &coach::App) -> Result<String, Box<dyn std::error::Error>> {
    let mut terminal = Terminal::new(TestBackend::new(80, 24))?;
    terminal.draw(|frame| coach::tui::render(frame, app))?;

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                text.push_str(cell.symbol());
            }
        }
        text.push('\n');
    }
    Ok(text)
}

#[test]
fn test_deleted_row_disappears_from_screen() -> Result<(), Box<dyn std::error::Error>> {
    let (mut app, _) = app_with_shortcuts(&["Shift + Cmd + L", "Option + Space"]);
    press(&mut app, KeyCode::Down);
    press_cmd(&mut app, 'w');

    let text = screen(&app)?;

    assert!(!text.contains("Shift + Cmd + L"));
    assert!(text.contains("Option + Space"));
    assert!(text.contains("Deleted Shift + Cmd + L"));
    Ok(())
}

#[test]
fn test_current_model_shown_after_add() -> Result<(), Box<dyn std::error::Error>> {
    let (mut app, _) = app_with_shortcuts(&[]);
    press(&mut app, KeyCode::Char('n'));
    type_str(&mut app, "Mistral");
    press(&mut app, KeyCode::Enter);

    let text = screen(&app)?;

    assert!(text.contains("Model: Mistral"));
    assert!(!text.contains("Add New Model"));
    Ok(())
}
