//! Command UART receive task
//!
//! Reads text lines from the UART, parses them into commands and forwards
//! display commands to the render task. Every line gets a one-line reply.

use defmt::*;
use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embedded_io_async::{Read, Write};
use portable_atomic::Ordering;

use ledbar_core::command::LineError;
use ledbar_core::{Command, CommandError, LineReader};

use crate::channels::{RenderCommand, CLOCK_VISIBLE, RENDER_CHANNEL};
use crate::clock::WALL_CLOCK;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Outcome of one command line, reported back to the sender
enum Reply {
    Ok,
    Line(LineError),
    Command(CommandError),
    ClockNotSet,
}

impl Reply {
    fn text(&self) -> &'static [u8] {
        match self {
            Reply::Ok => b"ok\r\n",
            Reply::Line(LineError::TooLong) => b"err line too long\r\n",
            Reply::Line(LineError::InvalidUtf8) => b"err invalid utf-8\r\n",
            Reply::Command(CommandError::UnknownCommand) => b"err unknown command\r\n",
            Reply::Command(CommandError::MissingArgument) => b"err missing argument\r\n",
            Reply::Command(CommandError::InvalidArgument) => b"err invalid argument\r\n",
            Reply::Command(CommandError::TextTooLong) => b"err text too long\r\n",
            Reply::ClockNotSet => b"err clock not set\r\n",
        }
    }
}

#[embassy_executor::task]
pub async fn command_rx_task(mut rx: BufferedUartRx, mut tx: BufferedUartTx) {
    info!("Command RX task started");

    let mut reader = LineReader::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        let n = match rx.read(&mut buf).await {
            Ok(n) => n,
            Err(e) => {
                warn!("UART read error: {:?}", e);
                continue;
            }
        };
        trace!("RX: {} bytes", n);

        for &byte in &buf[..n] {
            let reply = match reader.feed(byte) {
                Ok(Some(line)) => match Command::parse(line) {
                    Ok(command) => handle_command(command).await,
                    Err(e) => {
                        warn!("Rejected command {=str}: {:?}", line, e);
                        Reply::Command(e)
                    }
                },
                Ok(None) => continue,
                Err(e) => {
                    warn!("Line error: {:?}", e);
                    Reply::Line(e)
                }
            };

            if let Err(e) = tx.write_all(reply.text()).await {
                warn!("UART write error: {:?}", e);
            }
        }
    }
}

/// Apply clock commands here, queue everything else for rendering
async fn handle_command(command: Command) -> Reply {
    match command {
        Command::SetClock(unix_s) => {
            info!("Clock set to {}", unix_s);
            WALL_CLOCK.set(unix_s as u64);
            CLOCK_VISIBLE.store(true, Ordering::Relaxed);
            Reply::Ok
        }
        Command::ShowTime => {
            if WALL_CLOCK.now().is_none() {
                warn!("Time requested before the clock was set");
                return Reply::ClockNotSet;
            }
            CLOCK_VISIBLE.store(true, Ordering::Relaxed);
            Reply::Ok
        }
        command => {
            debug!("Queueing {:?}", command);
            // Foreground and power only change the palette for what follows
            if !matches!(command, Command::Foreground(_) | Command::Power(_)) {
                CLOCK_VISIBLE.store(false, Ordering::Relaxed);
            }
            RENDER_CHANNEL.send(RenderCommand::Execute(command)).await;
            Reply::Ok
        }
    }
}
