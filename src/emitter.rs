//! Line framing for the serial command stream.
//!
//! Every event becomes exactly one ASCII line ending in `\n\r`:
//!
//! | Event                 | Line            |
//! |-----------------------|-----------------|
//! | analog value changed  | `<0-100>\n\r`   |
//! | button A double-click | `previous\n\r`  |
//! | button B double-click | `next\n\r`      |
//! | button A timeout      | `stop\n\r`      |
//! | button B timeout      | `play_pause\n\r`|
//!
//! Transmission is blocking and unbuffered: no retry, no partial-line
//! recovery.

use core::fmt::Write;

use heapless::String;

use crate::config::{LINE_TERMINATOR, MAX_LINE_LEN};
use crate::error::Error;
use crate::hal::SerialTx;

/// Media commands produced by the click classifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    Previous,
    Next,
    Stop,
    PlayPause,
}

impl Command {
    /// Wire text, without terminator.
    pub const fn as_str(self) -> &'static str {
        match self {
            Command::Previous => "previous",
            Command::Next => "next",
            Command::Stop => "stop",
            Command::PlayPause => "play_pause",
        }
    }
}

/// Anything that goes out on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    Command(Command),
    /// Scaled analog reading.
    Level(u32),
}

impl From<Command> for Event {
    fn from(c: Command) -> Self {
        Event::Command(c)
    }
}

/// Render `event` as one terminated line.
pub fn format_line(event: Event) -> Result<String<MAX_LINE_LEN>, Error> {
    let mut line: String<MAX_LINE_LEN> = String::new();
    match event {
        Event::Command(c) => line.push_str(c.as_str()).map_err(|_| Error::LineOverflow)?,
        Event::Level(v) => write!(line, "{}", v).map_err(|_| Error::LineOverflow)?,
    }
    line.push_str(LINE_TERMINATOR).map_err(|_| Error::LineOverflow)?;
    Ok(line)
}

/// Formats events and pushes them out through the serial collaborator.
pub struct EventEmitter<S> {
    serial: S,
}

impl<S: SerialTx> EventEmitter<S> {
    pub fn new(serial: S) -> Self {
        Self { serial }
    }

    /// Format and transmit one event. Blocks until the line is sent.
    pub fn emit(&mut self, event: Event) -> Result<(), Error> {
        let line = format_line(event)?;
        self.serial.transmit(line.as_str())
    }

    pub fn serial(&self) -> &S {
        &self.serial
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::{String as StdString, ToString};
    use std::vec::Vec;

    #[derive(Default)]
    struct Recorder {
        lines: Vec<StdString>,
    }

    impl SerialTx for Recorder {
        fn transmit(&mut self, line: &str) -> Result<(), Error> {
            self.lines.push(line.to_string());
            Ok(())
        }
    }

    struct Broken;

    impl SerialTx for Broken {
        fn transmit(&mut self, _line: &str) -> Result<(), Error> {
            Err(Error::Serial)
        }
    }

    #[test]
    fn command_lines() {
        assert_eq!(format_line(Command::Previous.into()).unwrap(), "previous\n\r");
        assert_eq!(format_line(Command::Next.into()).unwrap(), "next\n\r");
        assert_eq!(format_line(Command::Stop.into()).unwrap(), "stop\n\r");
        assert_eq!(format_line(Command::PlayPause.into()).unwrap(), "play_pause\n\r");
    }

    #[test]
    fn level_lines_are_plain_decimal() {
        assert_eq!(format_line(Event::Level(0)).unwrap(), "0\n\r");
        assert_eq!(format_line(Event::Level(20)).unwrap(), "20\n\r");
        assert_eq!(format_line(Event::Level(100)).unwrap(), "100\n\r");
    }

    #[test]
    fn widest_level_still_fits() {
        assert_eq!(
            format_line(Event::Level(u32::MAX)).unwrap(),
            "4294967295\n\r"
        );
    }

    #[test]
    fn emit_sends_one_line_per_event() {
        let mut emitter = EventEmitter::new(Recorder::default());
        emitter.emit(Event::Level(42)).unwrap();
        emitter.emit(Command::Stop.into()).unwrap();
        assert_eq!(emitter.serial().lines, ["42\n\r", "stop\n\r"]);
    }

    #[test]
    fn emit_propagates_serial_failure() {
        let mut emitter = EventEmitter::new(Broken);
        assert_eq!(emitter.emit(Command::Next.into()), Err(Error::Serial));
    }
}
