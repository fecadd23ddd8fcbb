//! Path data parsing and interpretation.

use crate::canvas::{Canvas, Paint};
use common::Point;
use smallvec::SmallVec;

/// One parsed path command. All coordinates are absolute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Quadratic { control: Point, to: Point },
    /// Quadratic curve whose control point is implied by the previous one.
    SmoothQuadratic(Point),
    /// Close the current subpath, to the given point or else to its start.
    Close(Option<Point>),
}

const COMMAND_LETTERS: &[char] = &['M', 'L', 'Q', 'T', 'Z'];

/// Parse path data such as `"M 10 10 L 20 20 Q 30 10 40 20 Z"`.
///
/// A command is a letter followed by numbers separated by whitespace or
/// commas. Text before the first command letter is ignored, surplus numbers
/// are ignored, and commands with missing or malformed numbers are logged and
/// dropped.
pub fn parse_path_data(data: &str) -> Vec<PathCommand> {
    let mut commands = Vec::new();
    let mut rest = match data.find(COMMAND_LETTERS) {
        Some(start) => &data[start..],
        None => return commands,
    };

    while let Some(letter) = rest.chars().next() {
        let body = &rest[letter.len_utf8()..];
        let end = body.find(COMMAND_LETTERS).unwrap_or(body.len());
        match parse_command(letter, &body[..end]) {
            Some(command) => commands.push(command),
            None => tracing::warn!(
                "Skipping malformed path command: {}{}",
                letter,
                body[..end].trim_end()
            ),
        }
        rest = &body[end..];
    }
    commands
}

fn parse_command(letter: char, args: &str) -> Option<PathCommand> {
    let numbers = args
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<f64>().ok())
        .collect::<Option<SmallVec<[f64; 4]>>>()?;

    let point = |i: usize| Some(Point::new(*numbers.get(i)?, *numbers.get(i + 1)?));
    match letter {
        'M' => Some(PathCommand::MoveTo(point(0)?)),
        'L' => Some(PathCommand::LineTo(point(0)?)),
        'Q' => Some(PathCommand::Quadratic {
            control: point(0)?,
            to: point(2)?,
        }),
        'T' => Some(PathCommand::SmoothQuadratic(point(0)?)),
        'Z' if numbers.is_empty() => Some(PathCommand::Close(None)),
        'Z' => Some(PathCommand::Close(Some(point(0)?))),
        _ => None,
    }
}

/// Interpreter state carried from one path command to the next.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PathCursor {
    pub current: Point,
    pub subpath_start: Point,
    /// Control point of the most recent quadratic segment, until a close.
    pub last_control: Option<Point>,
}

impl Canvas<'_> {
    /// Stroke path data, returning where the cursor ended up.
    pub fn draw_path(&mut self, data: &str, paint: Paint) -> PathCursor {
        parse_path_data(data)
            .into_iter()
            .fold(PathCursor::default(), |cursor, command| {
                self.apply_path_command(cursor, command, paint)
            })
    }

    fn apply_path_command(
        &mut self,
        cursor: PathCursor,
        command: PathCommand,
        paint: Paint,
    ) -> PathCursor {
        match command {
            PathCommand::MoveTo(to) => PathCursor {
                current: to,
                subpath_start: to,
                ..cursor
            },
            PathCommand::LineTo(to) => {
                self.draw_line(cursor.current, to, paint);
                PathCursor { current: to, ..cursor }
            }
            PathCommand::Quadratic { control, to } => {
                self.draw_quadratic(cursor.current, control, to, paint);
                PathCursor {
                    current: to,
                    last_control: Some(control),
                    ..cursor
                }
            }
            PathCommand::SmoothQuadratic(to) => {
                let control = cursor
                    .last_control
                    .map_or(cursor.current, |last| last.reflect_through(cursor.current));
                self.draw_quadratic(cursor.current, control, to, paint);
                PathCursor {
                    current: to,
                    last_control: Some(control),
                    ..cursor
                }
            }
            PathCommand::Close(target) => {
                let to = target.unwrap_or(cursor.subpath_start);
                match cursor.last_control {
                    Some(control) => self.draw_quadratic(cursor.current, control, to, paint),
                    None => self.draw_line(cursor.current, to, paint),
                }
                PathCursor {
                    current: to,
                    last_control: None,
                    ..cursor
                }
            }
        }
    }
}
