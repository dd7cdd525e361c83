//! Sequential HTTP populator.
//!
//! One POST per record, strictly in order. A record whose upload fails is
//! logged and counted; it never stops the run and is never retried.

use crate::client::{HttpClient, HttpRequest};
use crate::delay::Delay;
use crate::error::HttpPopulatorError;
use seed_core::SeedRecord;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Status code the backend answers a successful create with.
pub const SUCCESS_STATUS: u16 = 200;

/// Name of the API key header.
pub const ACCESS_TOKEN_HEADER: &str = "access_token";

/// Where records are sent and how fast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    /// Endpoint receiving one POST per record.
    pub endpoint: String,
    /// Value of the `access_token` header; omitted when `None`.
    pub access_token: Option<String>,
    /// Pause between consecutive requests.
    pub delay: Duration,
}

impl UploadTarget {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            access_token: None,
            delay: Duration::ZERO,
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Result of uploading one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The backend answered with the success status.
    Added,
    /// The backend answered with any other status.
    Rejected { status: u16, body: String },
    /// No response was received, or the record could not be serialized.
    Failed { message: String },
    /// Dry-run mode; nothing was sent.
    Skipped,
}

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of records processed.
    pub records_attempted: u64,
    /// Records the backend accepted.
    pub records_added: u64,
    /// Records the backend answered with a non-success status.
    pub records_rejected: u64,
    /// Records that got no response.
    pub records_failed: u64,
    /// Records not sent because of dry-run mode.
    pub records_skipped: u64,
    /// Ids of accepted records, in upload order.
    pub added_ids: Vec<String>,
    /// Total time taken.
    pub total_duration: Duration,
}

impl PopulateMetrics {
    /// Rejected plus failed records.
    pub fn error_count(&self) -> u64 {
        self.records_rejected + self.records_failed
    }

    /// Calculate records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.records_attempted as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    fn record(&mut self, id: &str, outcome: &UploadOutcome) {
        self.records_attempted += 1;
        match outcome {
            UploadOutcome::Added => {
                self.records_added += 1;
                self.added_ids.push(id.to_string());
            }
            UploadOutcome::Rejected { .. } => self.records_rejected += 1,
            UploadOutcome::Failed { .. } => self.records_failed += 1,
            UploadOutcome::Skipped => self.records_skipped += 1,
        }
    }
}

/// Populator that uploads records to a REST endpoint.
///
/// # Example
///
/// ```ignore
/// let target = UploadTarget::new(DEFAULT_ORDERS_ENDPOINT)
///     .with_access_token(DEFAULT_ACCESS_TOKEN)
///     .with_delay(Duration::from_millis(100));
/// let populator = HttpPopulator::new(ReqwestClient::new(None)?, TokioDelay, target);
/// let metrics = populator.populate(&orders).await;
/// ```
pub struct HttpPopulator<C, D> {
    client: C,
    delay: D,
    target: UploadTarget,
    dry_run: bool,
}

impl<C: HttpClient, D: Delay> HttpPopulator<C, D> {
    /// Create a new HTTP populator.
    pub fn new(client: C, delay: D, target: UploadTarget) -> Self {
        Self {
            client,
            delay,
            target,
            dry_run: false,
        }
    }

    /// Log payloads instead of sending them.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Get a reference to the client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Get a reference to the delay.
    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Get a reference to the upload target.
    pub fn target(&self) -> &UploadTarget {
        &self.target
    }

    /// Upload every record in order.
    ///
    /// Every record is attempted exactly once regardless of earlier
    /// failures. The configured delay is awaited between records.
    pub async fn populate<R: SeedRecord + Sync>(&self, records: &[R]) -> PopulateMetrics {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        info!(
            "Uploading {} {} record(s) to '{}'{}",
            records.len(),
            R::KIND,
            self.target.endpoint,
            if self.dry_run { " (dry-run)" } else { "" }
        );

        for (position, record) in records.iter().enumerate() {
            if position > 0 && !self.dry_run && !self.target.delay.is_zero() {
                self.delay.sleep(self.target.delay).await;
            }

            let outcome = self.upload(record).await;
            metrics.record(record.id(), &outcome);
        }

        metrics.total_duration = start_time.elapsed();

        info!(
            "{} upload complete: {} added, {} rejected, {} failed of {} in {:?} ({:.2} rec/s)",
            R::KIND.title(),
            metrics.records_added,
            metrics.records_rejected,
            metrics.records_failed,
            metrics.records_attempted,
            metrics.total_duration,
            metrics.records_per_second()
        );

        metrics
    }

    /// Upload a single record and log the outcome.
    pub async fn upload<R: SeedRecord + Sync>(&self, record: &R) -> UploadOutcome {
        let kind = R::KIND;
        let label = record.label();

        let outcome = match self.send(record).await {
            Ok(outcome) => outcome,
            Err(e) => UploadOutcome::Failed {
                message: e.to_string(),
            },
        };

        match &outcome {
            UploadOutcome::Added => info!("{} added successfully: {}", kind.title(), label),
            UploadOutcome::Rejected { status, body } => {
                error!("Failed to add {} {}: Status {}", kind, label, status);
                error!("Response body: {}", body);
            }
            UploadOutcome::Failed { message } => {
                error!("Error adding {} {}: {}", kind, label, message)
            }
            UploadOutcome::Skipped => {}
        }

        outcome
    }

    async fn send<R: SeedRecord + Sync>(
        &self,
        record: &R,
    ) -> Result<UploadOutcome, HttpPopulatorError> {
        if self.dry_run {
            let payload = serde_json::to_string_pretty(record)?;
            info!("[DRY-RUN] Would POST {} to {}:\n{}", R::KIND, self.target.endpoint, payload);
            return Ok(UploadOutcome::Skipped);
        }

        if tracing::enabled!(tracing::Level::DEBUG) {
            debug!(
                "Generated {} data:\n{}",
                R::KIND.title(),
                serde_json::to_string_pretty(record)?
            );
        }

        let request = self.build_request(serde_json::to_string(record)?);
        let response = self.client.post(&request).await?;

        if response.status == SUCCESS_STATUS {
            Ok(UploadOutcome::Added)
        } else {
            Ok(UploadOutcome::Rejected {
                status: response.status,
                body: response.body,
            })
        }
    }

    fn build_request(&self, body: String) -> HttpRequest {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = &self.target.access_token {
            headers.push((ACCESS_TOKEN_HEADER.to_string(), token.clone()));
        }

        HttpRequest {
            url: self.target.endpoint.clone(),
            headers,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::HttpResponse;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use seed_core::{Order, OrderStatus, User};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// Answers every request with a scripted response, keyed by call number.
    #[derive(Default)]
    struct ScriptedClient {
        requests: Mutex<Vec<HttpRequest>>,
        failures: HashMap<usize, Result<u16, String>>,
    }

    impl ScriptedClient {
        fn always_ok() -> Self {
            Self::default()
        }

        fn with_failure(mut self, call: usize, failure: Result<u16, String>) -> Self {
            self.failures.insert(call, failure);
            self
        }

        fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpClient for ScriptedClient {
        async fn post(&self, request: &HttpRequest) -> Result<HttpResponse, HttpPopulatorError> {
            let call = {
                let mut requests = self.requests.lock().unwrap();
                requests.push(request.clone());
                requests.len()
            };

            match self.failures.get(&call) {
                None => Ok(HttpResponse {
                    status: 200,
                    body: "{}".to_string(),
                }),
                Some(Ok(status)) => Ok(HttpResponse {
                    status: *status,
                    body: "duplicate".to_string(),
                }),
                Some(Err(message)) => Err(HttpPopulatorError::Request(message.clone())),
            }
        }
    }

    #[derive(Default)]
    struct RecordingDelay {
        calls: Mutex<Vec<Duration>>,
    }

    #[async_trait]
    impl Delay for RecordingDelay {
        async fn sleep(&self, duration: Duration) {
            self.calls.lock().unwrap().push(duration);
        }
    }

    fn order(n: usize) -> Order {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        Order {
            id: format!("order{n:03}"),
            user_id: "user001".to_string(),
            products: vec!["prod-vzukvp808".to_string()],
            total_price: 1500.25,
            status: OrderStatus::New,
            created_at: now,
            updated_at: now,
        }
    }

    fn orders(count: usize) -> Vec<Order> {
        (1..=count).map(order).collect()
    }

    fn populator(client: ScriptedClient) -> HttpPopulator<ScriptedClient, RecordingDelay> {
        let target = UploadTarget::new("http://localhost:8000/api/orders/")
            .with_access_token("your-secret-api-key");
        HttpPopulator::new(client, RecordingDelay::default(), target)
    }

    #[tokio::test]
    async fn test_single_order_succeeds() {
        let populator = populator(ScriptedClient::always_ok());

        let metrics = populator.populate(&orders(1)).await;

        assert_eq!(metrics.records_attempted, 1);
        assert_eq!(metrics.records_added, 1);
        assert_eq!(metrics.error_count(), 0);
        assert_eq!(metrics.added_ids, vec!["order001"]);
    }

    #[tokio::test]
    async fn test_network_failure_does_not_stop_run() {
        let client =
            ScriptedClient::always_ok().with_failure(3, Err("connection reset".to_string()));
        let populator = populator(client);

        let metrics = populator.populate(&orders(5)).await;

        assert_eq!(populator.client().requests().len(), 5);
        assert_eq!(metrics.records_attempted, 5);
        assert_eq!(metrics.records_added, 4);
        assert_eq!(metrics.records_failed, 1);
        assert!(!metrics.added_ids.contains(&"order003".to_string()));
    }

    #[tokio::test]
    async fn test_non_success_status_is_rejected() {
        // 201 is not the success status for this backend
        let client = ScriptedClient::always_ok()
            .with_failure(1, Ok(400))
            .with_failure(2, Ok(201));
        let populator = populator(client);

        let records = orders(3);
        let first = populator.upload(&records[0]).await;
        let second = populator.upload(&records[1]).await;
        let third = populator.upload(&records[2]).await;

        assert_eq!(
            first,
            UploadOutcome::Rejected {
                status: 400,
                body: "duplicate".to_string()
            }
        );
        assert!(matches!(second, UploadOutcome::Rejected { status: 201, .. }));
        assert_eq!(third, UploadOutcome::Added);
    }

    #[tokio::test]
    async fn test_request_shape() {
        let populator = populator(ScriptedClient::always_ok());
        let records = orders(1);

        populator.populate(&records).await;

        let requests = populator.client().requests();
        let request = &requests[0];
        assert_eq!(request.url, "http://localhost:8000/api/orders/");
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(request.header("access_token"), Some("your-secret-api-key"));

        let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(body, serde_json::to_value(&records[0]).unwrap());
    }

    #[tokio::test]
    async fn test_no_access_token_header_when_unset() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let user = User {
            id: "user001".to_string(),
            username: "jannovak".to_string(),
            email: "jan.novak@example.com".to_string(),
            full_name: "Jan Novák".to_string(),
            token: None,
            is_activated: true,
            created_at: now,
            updated_at: now,
        };
        let target = UploadTarget::new("http://localhost:9000/api/users/register");
        let populator =
            HttpPopulator::new(ScriptedClient::always_ok(), RecordingDelay::default(), target);

        let metrics = populator.populate(&[user]).await;

        assert_eq!(metrics.records_added, 1);
        let requests = populator.client().requests();
        assert_eq!(requests[0].header("access_token"), None);
        assert!(requests[0].body.contains(r#""token":null"#));
    }

    #[tokio::test]
    async fn test_delay_between_records_only() {
        let target = UploadTarget::new("http://localhost:8000/api/orders/")
            .with_delay(Duration::from_millis(100));
        let populator =
            HttpPopulator::new(ScriptedClient::always_ok(), RecordingDelay::default(), target);

        populator.populate(&orders(4)).await;

        let calls = populator.delay().calls.lock().unwrap().clone();
        assert_eq!(calls, vec![Duration::from_millis(100); 3]);
    }

    #[tokio::test]
    async fn test_zero_delay_never_sleeps() {
        let populator = populator(ScriptedClient::always_ok());

        populator.populate(&orders(3)).await;

        assert!(populator.delay().calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dry_run_sends_nothing() {
        let populator = populator(ScriptedClient::always_ok()).with_dry_run(true);

        let metrics = populator.populate(&orders(3)).await;

        assert!(populator.client().requests().is_empty());
        assert_eq!(metrics.records_attempted, 3);
        assert_eq!(metrics.records_skipped, 3);
        assert_eq!(metrics.records_added, 0);
        assert!(metrics.added_ids.is_empty());
    }

    #[tokio::test]
    async fn test_empty_input() {
        let populator = populator(ScriptedClient::always_ok());

        let metrics = populator.populate::<Order>(&[]).await;

        assert_eq!(metrics.records_attempted, 0);
        assert!(populator.client().requests().is_empty());
    }

    /// In-memory log sink shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn lines(&self) -> Vec<String> {
            String::from_utf8_lossy(&self.0.lock().unwrap())
                .lines()
                .map(str::to_string)
                .collect()
        }

        fn matching(&self, needle: &str) -> Vec<String> {
            self.lines()
                .into_iter()
                .filter(|line| line.contains(needle))
                .collect()
        }
    }

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (logs, guard)
    }

    #[tokio::test]
    async fn test_single_order_logs_one_success_line() {
        let (logs, _guard) = capture_logs();
        let populator = populator(ScriptedClient::always_ok());

        populator.populate(&orders(1)).await;

        let added = logs.matching("added successfully");
        assert_eq!(added.len(), 1);
        assert!(added[0].contains("Order added successfully: order001"));
        assert!(logs.matching("ERROR").is_empty());
    }

    #[tokio::test]
    async fn test_network_failure_logs_error_line() {
        let (logs, _guard) = capture_logs();
        let client =
            ScriptedClient::always_ok().with_failure(3, Err("connection reset".to_string()));
        let populator = populator(client);

        populator.populate(&orders(5)).await;

        let errors = logs.matching("ERROR");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Error adding order order003: "));
        assert!(errors[0].contains("connection reset"));
        assert_eq!(logs.matching("added successfully").len(), 4);
    }

    #[tokio::test]
    async fn test_rejection_logs_status_and_body() {
        let (logs, _guard) = capture_logs();
        let populator = populator(ScriptedClient::always_ok().with_failure(1, Ok(400)));

        populator.populate(&orders(1)).await;

        let status = logs.matching("Failed to add order order001: Status 400");
        assert_eq!(status.len(), 1);
        let body = logs.matching("Response body: duplicate");
        assert_eq!(body.len(), 1);
        assert!(logs.matching("added successfully").is_empty());
    }

    #[test]
    fn test_metrics() {
        let metrics = PopulateMetrics {
            records_attempted: 100,
            records_added: 90,
            records_rejected: 6,
            records_failed: 4,
            records_skipped: 0,
            added_ids: vec![],
            total_duration: Duration::from_secs(10),
        };

        assert_eq!(metrics.records_per_second(), 10.0);
        assert_eq!(metrics.error_count(), 10);
        assert_eq!(PopulateMetrics::default().records_per_second(), 0.0);
    }
}
