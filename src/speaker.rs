//! Streams allophone codes to the chip.
//!
//! The chip's controller echoes every byte once it has accepted it, so only
//! one byte is ever in flight:
//!
//! 1. Wake: drain stale input, send `0` until a `0` comes back, drain again.
//! 2. Speak: for each byte, send it and wait until the same byte is echoed.
//!    Other bytes received meanwhile are ignored.
//!
//! Both waits are bounded by [`SpeakerOptions`].

use std::io::{self, Read, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};
use tracing::{debug, trace};

use crate::config::Settings;
use crate::error::{Error, Result};

/// A byte pipe to the chip.
pub trait Link {
    fn send(&mut self, byte: u8) -> Result<()>;
    /// Waits up to `timeout` for one byte; `None` if nothing arrived.
    fn recv(&mut self, timeout: Duration) -> Result<Option<u8>>;
}

/// A serial port, e.g. `/dev/ttyACM0`.
///
/// The line is opened raw, 8N1, at the given baud rate, so every byte passes
/// through unchanged in both directions.
pub struct SerialLink {
    port: Box<dyn SerialPort>,
}

impl SerialLink {
    pub fn open(path: &Path, baud: u32) -> Result<Self> {
        let port = serialport::new(path.to_string_lossy(), baud)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(Duration::from_millis(1))
            .open()?;
        debug!(?path, baud, "opened serial link");
        Ok(Self { port })
    }
}

impl Link for SerialLink {
    fn send(&mut self, byte: u8) -> Result<()> {
        self.port.write_all(&[byte])?;
        self.port.flush()?;
        Ok(())
    }

    fn recv(&mut self, timeout: Duration) -> Result<Option<u8>> {
        if self.port.timeout() != timeout {
            self.port.set_timeout(timeout)?;
        }
        let mut buf = [0u8; 1];
        match self.port.read(&mut buf) {
            Ok(0) => Err(Error::Disconnected),
            Ok(_) => Ok(Some(buf[0])),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
                ) =>
            {
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Timing limits for the handshake and echo waits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeakerOptions {
    /// Length of one receive poll.
    pub read_timeout: Duration,
    /// Longest wait for one echo; `None` waits forever.
    pub echo_timeout: Option<Duration>,
    /// Zero bytes to try while waking the device.
    pub wake_attempts: u32,
}

impl Default for SpeakerOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for SpeakerOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            read_timeout: settings.read_timeout(),
            echo_timeout: settings.echo_timeout(),
            wake_attempts: settings.wake_attempts,
        }
    }
}

/// Echo-acknowledged writer for the chip.
pub struct Speaker<L> {
    link: L,
    options: SpeakerOptions,
}

impl<L: Link> Speaker<L> {
    /// Wraps `link` without touching the device.
    pub fn new(link: L, options: SpeakerOptions) -> Self {
        Self { link, options }
    }

    /// Wraps `link` and wakes the device.
    pub fn connect(link: L, options: SpeakerOptions) -> Result<Self> {
        let mut speaker = Self::new(link, options);
        speaker.wake()?;
        Ok(speaker)
    }

    /// Discards input until a poll comes back empty.
    fn drain(&mut self) -> Result<usize> {
        let mut drained = 0;
        while self.link.recv(self.options.read_timeout)?.is_some() {
            drained += 1;
        }
        Ok(drained)
    }

    /// Synchronizes with the device.
    ///
    /// # Errors
    ///
    /// [`Error::DeviceUnresponsive`] if no `0` is echoed within
    /// [`SpeakerOptions::wake_attempts`] tries.
    pub fn wake(&mut self) -> Result<()> {
        let stale = self.drain()?;
        for attempt in 1..=self.options.wake_attempts {
            self.link.send(0)?;
            if self.link.recv(self.options.read_timeout)? == Some(0) {
                let late = self.drain()?;
                debug!(attempt, stale, late, "device awake");
                return Ok(());
            }
        }
        Err(Error::DeviceUnresponsive {
            attempts: self.options.wake_attempts,
        })
    }

    /// Sends `data`, waiting for each byte's echo before the next.
    ///
    /// # Errors
    ///
    /// [`Error::EchoTimeout`] if an echo does not arrive within
    /// [`SpeakerOptions::echo_timeout`], or any link error.
    pub fn speak(&mut self, data: &[u8]) -> Result<()> {
        for (index, &byte) in data.iter().enumerate() {
            self.link.send(byte)?;
            self.await_echo(byte, index)?;
        }
        debug!(bytes = data.len(), "spoke");
        Ok(())
    }

    fn await_echo(&mut self, byte: u8, index: usize) -> Result<()> {
        let deadline = self.options.echo_timeout.map(|t| Instant::now() + t);
        loop {
            match self.link.recv(self.options.read_timeout)? {
                Some(echo) if echo == byte => return Ok(()),
                Some(other) => trace!(expected = byte, got = other, "ignoring byte"),
                None => {}
            }
            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                return Err(Error::EchoTimeout {
                    byte,
                    index,
                    timeout: self.options.echo_timeout.unwrap_or_default(),
                });
            }
        }
    }

    #[must_use]
    pub fn into_inner(self) -> L {
        self.link
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::{Rng, SeedableRng, rngs::SmallRng};

    use super::*;

    /// Simulated chip: sleeps through the first few wake bytes, may prefix
    /// each echo with noise, and can be told to stop answering.
    #[derive(Default)]
    struct FakeChip {
        sent: Vec<u8>,
        pending: VecDeque<u8>,
        asleep_for: usize,
        noise: Option<u8>,
        mute: bool,
    }

    impl Link for FakeChip {
        fn send(&mut self, byte: u8) -> Result<()> {
            self.sent.push(byte);
            if self.mute {
                return Ok(());
            }
            if self.asleep_for > 0 {
                self.asleep_for -= 1;
                return Ok(());
            }
            if let Some(noise) = self.noise {
                self.pending.push_back(noise);
            }
            self.pending.push_back(byte);
            Ok(())
        }

        fn recv(&mut self, _timeout: Duration) -> Result<Option<u8>> {
            Ok(self.pending.pop_front())
        }
    }

    fn options() -> SpeakerOptions {
        SpeakerOptions {
            read_timeout: Duration::from_millis(1),
            echo_timeout: Some(Duration::from_millis(5)),
            wake_attempts: 20,
        }
    }

    #[test]
    fn wake_drains_and_retries() {
        let chip = FakeChip {
            pending: VecDeque::from([7, 7, 7]),
            asleep_for: 3,
            ..FakeChip::default()
        };
        let chip = Speaker::connect(chip, options()).unwrap().into_inner();
        assert_eq!(chip.sent, vec![0, 0, 0, 0]);
        assert!(chip.pending.is_empty());
    }

    #[test]
    fn wake_gives_up() {
        let chip = FakeChip {
            mute: true,
            ..FakeChip::default()
        };
        let err = Speaker::connect(chip, options()).err().unwrap();
        assert!(matches!(err, Error::DeviceUnresponsive { attempts: 20 }));
    }

    #[test]
    fn speak_sends_every_byte_once() {
        let mut rng = SmallRng::seed_from_u64(69);
        let data: Vec<u8> = (0..200).map(|_| rng.random_range(0..64)).collect();
        let mut speaker = Speaker::new(FakeChip::default(), options());
        speaker.speak(&data).unwrap();
        let chip = speaker.into_inner();
        assert_eq!(chip.sent, data);
        assert!(chip.pending.is_empty());
    }

    #[test]
    fn speak_ignores_other_bytes() {
        let chip = FakeChip {
            noise: Some(0xff),
            ..FakeChip::default()
        };
        let mut speaker = Speaker::new(chip, options());
        speaker.speak(&[1, 27, 7, 2]).unwrap();
        assert_eq!(speaker.into_inner().sent, vec![1, 27, 7, 2]);
    }

    #[test]
    fn missing_echo_times_out() {
        let chip = FakeChip {
            mute: true,
            ..FakeChip::default()
        };
        let mut speaker = Speaker::new(chip, options());
        let err = speaker.speak(&[5, 6]).unwrap_err();
        assert!(matches!(
            err,
            Error::EchoTimeout {
                byte: 5,
                index: 0,
                ..
            }
        ));
        assert_eq!(speaker.into_inner().sent, vec![5]);
    }

    #[test]
    fn options_follow_settings() {
        let settings = Settings {
            echo_timeout_ms: 0,
            wake_attempts: 3,
            ..Settings::default()
        };
        let options = SpeakerOptions::from(&settings);
        assert_eq!(options.echo_timeout, None);
        assert_eq!(options.wake_attempts, 3);
        assert_eq!(SpeakerOptions::default().echo_timeout, Some(Duration::from_secs(2)));
    }
}
