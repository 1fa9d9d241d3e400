//! The alert relay: one alert in, one card out.

use std::sync::Arc;

use crate::domain::{AlertPayload, MessageCard, PlateCardFields, TimestampFormat, ViewerLink};
use crate::error::RelayError;
use crate::ports::CardNotifier;

/// Response message when the alert carried no plate.
pub const FALLBACK_MESSAGE: &str = "This HTTP triggered function executed successfully.";

/// Rendering settings for the relay.
#[derive(Debug, Clone, Default)]
pub struct RelaySettings {
    pub timestamp: TimestampFormat,
    pub viewer: ViewerLink,
}

/// Turns ANPR alerts into MessageCards and hands them to a notifier.
pub struct AlertRelay {
    notifier: Arc<dyn CardNotifier>,
    settings: RelaySettings,
}

impl AlertRelay {
    pub fn new(notifier: Arc<dyn CardNotifier>, settings: RelaySettings) -> Self {
        Self { notifier, settings }
    }

    /// Handle one raw alert body and return the response message for the caller.
    pub async fn handle(&self, body: &[u8]) -> Result<String, RelayError> {
        tracing::info!(bytes = body.len(), "Processing ANPR alert");

        let alert = AlertPayload::from_slice(body)?;
        let card = self.render(&alert);

        tracing::debug!(title = %card.title, "Delivering plate card");
        self.notifier.deliver(&card).await?;

        Ok(response_message(alert.plate()))
    }

    /// Render the card for an alert without delivering it.
    pub fn render(&self, alert: &AlertPayload) -> MessageCard {
        let plate = alert.plate.as_deref().unwrap_or_default();
        let recorded_at = alert
            .epoch_start_ms
            .and_then(|ms| self.settings.timestamp.render(ms))
            .unwrap_or_default();
        let link = self
            .settings
            .viewer
            .build(alert.alert_list_id.as_deref().unwrap_or_default(), plate);

        MessageCard::plate_alert(PlateCardFields {
            plate,
            image_base64: alert.vehicle_crop_jpeg.as_deref().unwrap_or_default(),
            recorded_at: &recorded_at,
            camera_name: alert.camera_name.as_deref().unwrap_or_default(),
            alert_list: alert.alert_list.as_deref().unwrap_or_default(),
            description: alert.description.as_deref().unwrap_or_default(),
            link: &link,
        })
    }
}

fn response_message(plate: Option<&str>) -> String {
    match plate {
        Some(plate) => format!("Processed {}.", plate),
        None => FALLBACK_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::DeliveryError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNotifier {
        cards: Mutex<Vec<MessageCard>>,
    }

    #[async_trait]
    impl CardNotifier for RecordingNotifier {
        async fn deliver(&self, card: &MessageCard) -> Result<(), DeliveryError> {
            self.cards.lock().unwrap().push(card.clone());
            Ok(())
        }
    }

    struct FailingNotifier;

    #[async_trait]
    impl CardNotifier for FailingNotifier {
        async fn deliver(&self, _card: &MessageCard) -> Result<(), DeliveryError> {
            Err(DeliveryError::Rejected {
                status: 500,
                body: "boom".to_string(),
            })
        }
    }

    fn relay_with(notifier: Arc<dyn CardNotifier>) -> AlertRelay {
        let settings = RelaySettings {
            timestamp: TimestampFormat::new(0, "en_AU", "%-d %B %Y %H:%M").unwrap(),
            viewer: ViewerLink::new("https://viewer.local/#search"),
        };
        AlertRelay::new(notifier, settings)
    }

    fn fact<'a>(card: &'a MessageCard, name: &str) -> &'a str {
        card.sections[0]
            .facts
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
            .unwrap()
    }

    #[tokio::test]
    async fn test_end_to_end_plate_alert() {
        let notifier = Arc::new(RecordingNotifier::default());
        let relay = relay_with(notifier.clone());

        let body = br#"{
            "camera_name": "Front Gate",
            "alert_list": "Stolen Vehicles",
            "alert_list_id": "7",
            "description": "Reported stolen",
            "group": {
                "best_plate_number": "ABC123",
                "epoch_start": 1609459200000,
                "vehicle_crop_jpeg": "aGVsbG8=",
                "vehicle": {"make_model": [{"name": "honda_jazz", "confidence": 90.1}]}
            }
        }"#;

        let message = relay.handle(body).await.unwrap();
        assert_eq!(message, "Processed ABC123.");

        let cards = notifier.cards.lock().unwrap();
        assert_eq!(cards.len(), 1);
        let card = &cards[0];
        assert_eq!(card.title, "Plate ABC123");
        assert_eq!(fact(card, "Date Recorded:"), "1 January 2021 00:00");
        assert_eq!(fact(card, "Camera:"), "Front Gate");
        assert_eq!(
            fact(card, "Link:"),
            "[Open in OpenANPR](https://viewer.local/#search&alertlist=7&plate_number=ABC123)"
        );
    }

    #[tokio::test]
    async fn test_missing_plate_uses_fallback() {
        let notifier = Arc::new(RecordingNotifier::default());
        let relay = relay_with(notifier.clone());

        assert_eq!(relay.handle(b"{}").await.unwrap(), FALLBACK_MESSAGE);
        assert_eq!(
            relay
                .handle(br#"{"group": {"best_plate_number": ""}}"#)
                .await
                .unwrap(),
            FALLBACK_MESSAGE
        );
        // The card still goes out, with empty values.
        assert_eq!(notifier.cards.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_make_model_and_epoch_do_not_fail() {
        let notifier = Arc::new(RecordingNotifier::default());
        let relay = relay_with(notifier.clone());

        let message = relay
            .handle(br#"{"group": {"best_plate_number": "QLD001", "vehicle": {}}}"#)
            .await
            .unwrap();
        assert_eq!(message, "Processed QLD001.");

        let cards = notifier.cards.lock().unwrap();
        assert_eq!(fact(&cards[0], "Date Recorded:"), "");
        assert_eq!(fact(&cards[0], "Camera:"), "");
    }

    #[tokio::test]
    async fn test_malformed_body_is_not_delivered() {
        let notifier = Arc::new(RecordingNotifier::default());
        let relay = relay_with(notifier.clone());

        let err = relay.handle(b"not json").await.unwrap_err();
        assert!(matches!(err, RelayError::MalformedInput(_)));
        assert!(notifier.cards.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delivery_failure_propagates() {
        let relay = relay_with(Arc::new(FailingNotifier));

        let err = relay
            .handle(br#"{"group": {"best_plate_number": "ABC123"}}"#)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RelayError::Delivery(DeliveryError::Rejected { status: 500, .. })
        ));
    }
}
