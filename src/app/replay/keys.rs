use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use wakeline::replay::{PanDirection, ReplayAction};

use crate::ui::model::FilterFocus;

/// What a key press asks the runner to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum KeyCommand {
    Quit,
    Replay(ReplayAction),
    SwitchFocus,
    WriteSnapshot,
    WriteChart,
}

pub(super) fn map_key(key: KeyEvent, focus: FilterFocus) -> Option<KeyCommand> {
    if let KeyCode::Char(ch) = key.code {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(ch, 'c' | 'C').then_some(KeyCommand::Quit);
        }
        return map_char(ch, focus);
    }

    let action = if matches!(key.code, KeyCode::Esc) {
        return Some(KeyCommand::Quit);
    } else if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        return Some(KeyCommand::SwitchFocus);
    } else if matches!(key.code, KeyCode::Home) {
        ReplayAction::SeekStart
    } else if matches!(key.code, KeyCode::End) {
        ReplayAction::SeekEnd
    } else if matches!(key.code, KeyCode::PageUp) {
        ReplayAction::SeekBackward
    } else if matches!(key.code, KeyCode::PageDown) {
        ReplayAction::SeekForward
    } else if matches!(key.code, KeyCode::Up) {
        ReplayAction::Pan(PanDirection::Up)
    } else if matches!(key.code, KeyCode::Down) {
        ReplayAction::Pan(PanDirection::Down)
    } else if matches!(key.code, KeyCode::Left) {
        ReplayAction::Pan(PanDirection::Left)
    } else if matches!(key.code, KeyCode::Right) {
        ReplayAction::Pan(PanDirection::Right)
    } else {
        return None;
    };
    Some(KeyCommand::Replay(action))
}

fn map_char(ch: char, focus: FilterFocus) -> Option<KeyCommand> {
    let action = match ch {
        'q' | 'Q' => return Some(KeyCommand::Quit),
        'w' => return Some(KeyCommand::WriteSnapshot),
        'p' => return Some(KeyCommand::WriteChart),
        ' ' => ReplayAction::TogglePlay,
        '+' | '=' => ReplayAction::Accelerate,
        '-' | '_' => ReplayAction::Slow,
        '[' | ',' => ReplayAction::SeekBackward,
        ']' | '.' => ReplayAction::SeekForward,
        'z' => ReplayAction::ZoomIn,
        'x' => ReplayAction::ZoomOut,
        '0' => ReplayAction::ResetView,
        '1'..='9' => {
            let index = ch.to_digit(10)?.checked_sub(1)?;
            let index = usize::try_from(index).ok()?;
            match focus {
                FilterFocus::Sections => ReplayAction::ToggleSection(index),
                FilterFocus::Classes => ReplayAction::ToggleClass(index),
            }
        }
        _ => return None,
    };
    Some(KeyCommand::Replay(action))
}
