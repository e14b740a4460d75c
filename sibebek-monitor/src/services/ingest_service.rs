use rumqttc::{AsyncClient, ConnectReturnCode, Event, EventLoop, Packet, QoS};
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;
use uuid::Uuid;

use sibebek_api::{Channel, ConnectionStatus, Reading, parse_reading};

use crate::configs::{Broker, BrokerEndpoint};
use crate::errors::BrokerError;
use crate::models::IngestEvent;

const REQUEST_CAPACITY: usize = 10;

/// Tracks the broker status the way a browser MQTT client reports it.
#[derive(Debug, Default)]
pub struct StatusTracker {
    status: ConnectionStatus,
}

impl StatusTracker {
    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn connected(&mut self) -> Option<ConnectionStatus> {
        self.transition(ConnectionStatus::Connected)
    }

    pub fn refused(&mut self) -> Option<ConnectionStatus> {
        self.transition(ConnectionStatus::ConnectionError)
    }

    /// A dropped live connection goes offline; failing to get one at all is
    /// an error.
    pub fn failed(&mut self) -> Option<ConnectionStatus> {
        if self.status.is_connected() {
            self.transition(ConnectionStatus::Offline)
        } else {
            self.transition(ConnectionStatus::ConnectionError)
        }
    }

    pub fn retrying(&mut self) -> Option<ConnectionStatus> {
        self.transition(ConnectionStatus::Reconnecting)
    }

    // Some(new) only when the status actually changed
    fn transition(&mut self, next: ConnectionStatus) -> Option<ConnectionStatus> {
        if self.status == next {
            None
        } else {
            self.status = next;
            Some(next)
        }
    }
}

pub struct IngestService {
    client: AsyncClient,
    event_loop: EventLoop,
    broker: Broker,
    tracker: StatusTracker,
    sender: Sender<IngestEvent>,
}

impl IngestService {
    pub fn new(broker: &Broker, sender: &Sender<IngestEvent>) -> Result<Self, BrokerError> {
        let endpoint = BrokerEndpoint::parse(&broker.url)?;
        let client_id = Self::client_id(&broker.client_id_prefix);
        let options = endpoint.mqtt_options(&client_id, broker);

        tracing::debug!("mqtt client {} for {}", client_id, endpoint);

        let (client, event_loop) = AsyncClient::new(options, REQUEST_CAPACITY);

        Ok(Self {
            client,
            event_loop,
            broker: broker.clone(),
            tracker: StatusTracker::default(),
            sender: sender.clone(),
        })
    }

    /// `{prefix}-` followed by six random hex digits.
    pub fn client_id(prefix: &str) -> String {
        let random = Uuid::new_v4().simple().to_string();

        format!("{prefix}-{}", &random[..6])
    }

    pub fn client(&self) -> AsyncClient {
        self.client.clone()
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Polls the broker until the dashboard hangs up. Connection errors never
    /// end the loop; the next poll reconnects after `reconnect_period`.
    pub async fn run(mut self) {
        let initial = self.tracker.status();
        if !self.notify(IngestEvent::Status(initial)).await {
            return;
        }

        loop {
            let delivered = match self.event_loop.poll().await {
                Ok(Event::Incoming(Packet::ConnAck(connack))) => {
                    if connack.code == ConnectReturnCode::Success {
                        tracing::info!("Connected to MQTT broker");
                        let delivered = self.notify_status(|tracker| tracker.connected()).await;
                        self.subscribe_all();
                        delivered
                    } else {
                        tracing::error!("MQTT connection refused: {:?}", connack.code);
                        self.notify_status(|tracker| tracker.refused()).await
                    }
                }
                Ok(Event::Incoming(Packet::Publish(publish))) => {
                    match decode_publish(&self.broker.topic_prefix, &publish.topic, &publish.payload) {
                        Some(event) => self.notify(event).await,
                        None => {
                            tracing::debug!("ignore message on {}", publish.topic);
                            true
                        }
                    }
                }
                Ok(Event::Incoming(Packet::SubAck(suback))) => {
                    tracing::debug!("subscription acknowledged: {:?}", suback.return_codes);
                    true
                }
                Ok(_) => true,
                Err(e) => {
                    tracing::error!("MQTT error: {}", e);
                    if !self.notify_status(|tracker| tracker.failed()).await {
                        break;
                    }

                    tokio::time::sleep(self.broker.reconnect_period()).await;

                    tracing::info!("Reconnecting to MQTT broker...");
                    self.notify_status(|tracker| tracker.retrying()).await
                }
            };

            if !delivered {
                tracing::debug!("dashboard closed, stop ingesting");
                break;
            }
        }
    }

    /// Clean sessions drop subscriptions, so this runs on every ConnAck.
    /// Must not wait on the request queue: this task is the one draining it.
    pub fn subscribe_all(&mut self) {
        for channel in Channel::ALL {
            let topic = channel.topic(&self.broker.topic_prefix);

            match self.subscribe(&topic) {
                Ok(()) => tracing::debug!("subscribe topic {}", topic),
                Err(e) => tracing::error!("Failed to subscribe to {} topic: {}", channel, e),
            }
        }
    }

    fn subscribe(&mut self, topic: &str) -> Result<(), BrokerError> {
        self.client.try_subscribe(topic, QoS::AtMostOnce)?;

        Ok(())
    }

    async fn notify_status<F>(&mut self, transition: F) -> bool
    where
        F: FnOnce(&mut StatusTracker) -> Option<ConnectionStatus>,
    {
        match transition(&mut self.tracker) {
            Some(status) => self.notify(IngestEvent::Status(status)).await,
            None => true,
        }
    }

    // false once the receiving side is gone
    async fn notify(&mut self, event: IngestEvent) -> bool {
        self.sender.send(event).await.is_ok()
    }
}

/// Map a publish to a reading event. Topics that are not one of the three
/// channels under `prefix` yield `None`.
pub fn decode_publish(prefix: &str, topic: &str, payload: &[u8]) -> Option<IngestEvent> {
    let channel = Channel::from_topic(prefix, topic)?;
    let value = parse_reading(payload);

    if value.is_nan() {
        tracing::warn!("Malformed payload on {}: {:?}", topic, String::from_utf8_lossy(payload));
    } else {
        tracing::debug!("Received message on {}: {}", topic, value);
    }

    Some(IngestEvent::Reading { channel, reading: Reading::Value(value) })
}
