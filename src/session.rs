//! TCP reader session (spec.md §4.6, §5): the
//! DISCONNECTED → CONNECTING → AWAITING_READER_EVENT → READY ⇄ LISTENING →
//! CLOSING → DISCONNECTED state machine, request/response correlation by
//! message ID, a spawned reader-loop task, and keepalive auto-ack. Built on
//! `tokio`, generalizing the teacher's `client.rs` (plain `TcpStream` I/O,
//! no concurrency) into the async "parallel tasks" model spec.md §5
//! describes (see DESIGN.md for why the cooperative alternative wasn't
//! also built).

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex as StdMutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::tcp::OwnedWriteHalf;
use tokio::net::TcpStream;
use tokio::sync::{mpsc, oneshot, Mutex as AsyncMutex};
use tokio::task::JoinHandle;

use crate::codec;
use crate::error::{LlrpError, Result, SessionError};
use crate::message::{Item, Message};
use crate::session_config::SessionConfig;
use crate::spec_registry::SpecRegistry;
use crate::value::Value;

const FRAME_HEADER_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Connecting,
    AwaitingReaderEvent,
    Ready,
    Listening,
    Closing,
}

type CorrelationTable = StdMutex<HashMap<u32, oneshot::Sender<Message>>>;

pub struct Session {
    registry: Arc<SpecRegistry>,
    write_half: Arc<AsyncMutex<OwnedWriteHalf>>,
    correlation: Arc<CorrelationTable>,
    next_message_id: Arc<AtomicU32>,
    state: Arc<StdMutex<SessionState>>,
    unsolicited_rx: StdMutex<Option<mpsc::UnboundedReceiver<Message>>>,
    reader_task: JoinHandle<()>,
    config: SessionConfig,
}

impl Session {
    /// Connects, spawns the reader loop, and blocks until the reader's
    /// initial `READER_EVENT_NOTIFICATION` arrives (spec.md §4.6:
    /// AWAITING_READER_EVENT → READY).
    pub async fn connect(registry: Arc<SpecRegistry>, config: SessionConfig) -> Result<Session> {
        let addr = format!("{}:{}", config.host, config.port);
        let stream = tokio::time::timeout(config.connect_timeout(), TcpStream::connect(&addr))
            .await
            .map_err(|_| SessionError::Timeout(config.connect_timeout()))?
            .map_err(|source| SessionError::ConnectFailed { addr: addr.clone(), source })?;
        let (read_half, write_half) = stream.into_split();
        let write_half = Arc::new(AsyncMutex::new(write_half));
        let correlation: Arc<CorrelationTable> = Arc::new(StdMutex::new(HashMap::new()));
        let (unsolicited_tx, unsolicited_rx) = mpsc::unbounded_channel();
        let state = Arc::new(StdMutex::new(SessionState::Connecting));

        let (ready_tx, ready_rx) = oneshot::channel();
        let reader_task = spawn_reader_loop(
            read_half,
            Arc::clone(&registry),
            Arc::clone(&correlation),
            Arc::clone(&write_half),
            unsolicited_tx,
            Arc::clone(&state),
            ready_tx,
            config.max_frame_len,
        );

        *state.lock().unwrap() = SessionState::AwaitingReaderEvent;
        tokio::time::timeout(config.connect_timeout(), ready_rx)
            .await
            .map_err(|_| SessionError::Timeout(config.connect_timeout()))?
            .map_err(|_| SessionError::PeerClosed)?;
        *state.lock().unwrap() = SessionState::Ready;

        Ok(Session {
            registry,
            write_half,
            correlation,
            next_message_id: Arc::new(AtomicU32::new(1)),
            state,
            unsolicited_rx: StdMutex::new(Some(unsolicited_rx)),
            reader_task,
            config,
        })
    }

    pub fn state(&self) -> SessionState {
        *self.state.lock().unwrap()
    }

    /// Takes ownership of the channel carrying unsolicited messages
    /// (`RO_ACCESS_REPORT`, later `READER_EVENT_NOTIFICATION`s) — callable
    /// once. Transitions the session's logical state to `Listening`.
    pub fn take_unsolicited_receiver(&self) -> Option<mpsc::UnboundedReceiver<Message>> {
        let rx = self.unsolicited_rx.lock().unwrap().take();
        if rx.is_some() {
            *self.state.lock().unwrap() = SessionState::Listening;
        }
        rx
    }

    /// Sends `spec_name` with `field_values`/`sub_items` and awaits its
    /// correlated response (spec.md §4.6 "transact").
    pub async fn transact(
        &self,
        spec_name: &'static str,
        field_values: std::collections::BTreeMap<&'static str, Value>,
        sub_items: Vec<Item>,
    ) -> Result<Message> {
        let message_id = self.next_message_id.fetch_add(1, Ordering::SeqCst);
        let msg = Message::new(&self.registry, spec_name, message_id, field_values, sub_items)?;
        let (tx, rx) = oneshot::channel();
        self.correlation.lock().unwrap().insert(message_id, tx);
        if let Err(e) = self.send(&msg).await {
            self.correlation.lock().unwrap().remove(&message_id);
            return Err(e);
        }
        match tokio::time::timeout(self.config.transact_timeout(), rx).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(_)) => Err(SessionError::Cancelled.into()),
            Err(_) => {
                self.correlation.lock().unwrap().remove(&message_id);
                Err(SessionError::Timeout(self.config.transact_timeout()).into())
            }
        }
    }

    async fn send(&self, msg: &Message) -> Result<()> {
        let bytes = codec::encode_binary(&self.registry, msg)?;
        let mut write_half = self.write_half.lock().await;
        write_half.write_all(&bytes).await.map_err(SessionError::IoError)?;
        Ok(())
    }

    /// Sends `CLOSE_CONNECTION`, awaits its response, and tears down the
    /// reader task (spec.md §4.6: → CLOSING → DISCONNECTED).
    pub async fn close(&self) -> Result<()> {
        *self.state.lock().unwrap() = SessionState::Closing;
        let result = self.transact("CLOSE_CONNECTION", std::collections::BTreeMap::new(), Vec::new()).await;
        self.reader_task.abort();
        *self.state.lock().unwrap() = SessionState::Disconnected;
        result.map(|_| ())
    }
}

#[allow(clippy::too_many_arguments)]
fn spawn_reader_loop(
    mut read_half: tokio::net::tcp::OwnedReadHalf,
    registry: Arc<SpecRegistry>,
    correlation: Arc<CorrelationTable>,
    write_half: Arc<AsyncMutex<OwnedWriteHalf>>,
    unsolicited_tx: mpsc::UnboundedSender<Message>,
    state: Arc<StdMutex<SessionState>>,
    ready_tx: oneshot::Sender<()>,
    max_frame_len: usize,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ready_tx = Some(ready_tx);
        loop {
            let frame = match read_frame(&mut read_half, max_frame_len).await {
                Ok(Some(frame)) => frame,
                Ok(None) => {
                    log::info!("LLRP peer closed the connection");
                    break;
                }
                Err(e) => {
                    log::warn!("reader loop I/O error: {e}");
                    break;
                }
            };
            let msg = match codec::decode_binary(&registry, &frame) {
                Ok(msg) => msg,
                Err(e) => {
                    log::warn!("dropping undecodable frame: {e}");
                    continue;
                }
            };

            if let Some(tx) = ready_tx.take() {
                if msg.spec_name == "READER_EVENT_NOTIFICATION" {
                    let _ = tx.send(());
                } else {
                    ready_tx = Some(tx);
                }
            }

            if msg.spec_name == "KEEPALIVE" {
                if let Ok(ack) = Message::new(&registry, "KEEPALIVE_ACK", msg.message_id, Default::default(), Vec::new()) {
                    if let Ok(bytes) = codec::encode_binary(&registry, &ack) {
                        let mut wh = write_half.lock().await;
                        if let Err(e) = wh.write_all(&bytes).await {
                            log::warn!("failed to send KEEPALIVE_ACK: {e}");
                        }
                    }
                }
                continue;
            }

            let mut table = correlation.lock().unwrap();
            if let Some(tx) = table.remove(&msg.message_id) {
                drop(table);
                let _ = tx.send(msg);
            } else {
                drop(table);
                let _ = unsolicited_tx.send(msg);
            }
        }
        // The connection is gone: wake every outstanding `transact` by
        // dropping its completion slot, so callers see `Cancelled` instead
        // of waiting out their full timeout (spec.md §4.6 "Cancellation").
        correlation.lock().unwrap().clear();
        *state.lock().unwrap() = SessionState::Disconnected;
    })
}

async fn read_frame(
    read_half: &mut tokio::net::tcp::OwnedReadHalf,
    max_frame_len: usize,
) -> std::result::Result<Option<Vec<u8>>, LlrpError> {
    let mut header = [0u8; FRAME_HEADER_LEN];
    match read_half.read_exact(&mut header).await {
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(SessionError::IoError(e).into()),
    }
    let total_len = u32::from_be_bytes([header[2], header[3], header[4], header[5]]) as usize;
    if total_len < FRAME_HEADER_LEN {
        return Err(crate::error::CodecError::FramingError(format!("declared length {total_len} shorter than header")).into());
    }
    if total_len > max_frame_len {
        return Err(crate::error::CodecError::FramingError(format!(
            "declared length {total_len} exceeds configured maximum {max_frame_len}"
        ))
        .into());
    }
    let mut frame = Vec::with_capacity(total_len);
    frame.extend_from_slice(&header);
    let mut rest = vec![0u8; total_len - FRAME_HEADER_LEN];
    read_half.read_exact(&mut rest).await.map_err(SessionError::IoError)?;
    frame.extend_from_slice(&rest);
    Ok(Some(frame))
}
