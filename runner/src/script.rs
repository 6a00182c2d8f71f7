use std::fmt;

use snake_common::games::snake::Direction;

/// What the host does before one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptStep {
    Idle,
    Turn(Direction),
    Reset,
    ToggleBorder,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ScriptError {
    UnknownStep { position: usize, symbol: char },
    Empty,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::UnknownStep { position, symbol } => write!(
                f,
                "Unknown script step '{}' at position {} (expected one of U D L R . r w)",
                symbol, position
            ),
            ScriptError::Empty => write!(f, "Script has no steps"),
        }
    }
}

impl std::error::Error for ScriptError {}

/// One step per character: `U D L R` turn, `.` idles, `r` resets, `w` toggles
/// the border mode. Whitespace is ignored so long scripts can be wrapped.
pub fn parse_script(script: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let steps = script
        .chars()
        .enumerate()
        .filter(|(_, symbol)| !symbol.is_whitespace())
        .map(|(position, symbol)| parse_step(symbol).ok_or(ScriptError::UnknownStep { position, symbol }))
        .collect::<Result<Vec<_>, _>>()?;

    if steps.is_empty() {
        return Err(ScriptError::Empty);
    }
    Ok(steps)
}

fn parse_step(symbol: char) -> Option<ScriptStep> {
    let step = match symbol {
        'U' => ScriptStep::Turn(Direction::Up),
        'D' => ScriptStep::Turn(Direction::Down),
        'L' => ScriptStep::Turn(Direction::Left),
        'R' => ScriptStep::Turn(Direction::Right),
        '.' => ScriptStep::Idle,
        'r' => ScriptStep::Reset,
        'w' => ScriptStep::ToggleBorder,
        _ => return None,
    };
    Some(step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_steps() {
        let steps = parse_script("UDLR.rw").unwrap();
        assert_eq!(
            steps,
            vec![
                ScriptStep::Turn(Direction::Up),
                ScriptStep::Turn(Direction::Down),
                ScriptStep::Turn(Direction::Left),
                ScriptStep::Turn(Direction::Right),
                ScriptStep::Idle,
                ScriptStep::Reset,
                ScriptStep::ToggleBorder,
            ]
        );
    }

    #[test]
    fn test_whitespace_is_skipped() {
        assert_eq!(parse_script(" . .\n..\t").unwrap().len(), 4);
    }

    #[test]
    fn test_unknown_step_reports_position() {
        assert_eq!(
            parse_script("..x."),
            Err(ScriptError::UnknownStep { position: 2, symbol: 'x' })
        );
        // Lowercase directions are not turns.
        assert!(parse_script("u").is_err());
    }

    #[test]
    fn test_empty_script_is_rejected() {
        assert_eq!(parse_script("   "), Err(ScriptError::Empty));
    }
}
