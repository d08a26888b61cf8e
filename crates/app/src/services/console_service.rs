//! Console service: use-cases behind every console front-end.

use std::sync::Arc;

use salute_console_domain::command::Command;
use salute_console_domain::device::validate_snapshot;
use salute_console_domain::endpoint::Endpoint;
use salute_console_domain::error::{ApiError, ConsoleError};
use salute_console_domain::request::{
    CommandRequest, DeviceUpdateRequest, FeatureUpdateRequest, Payload,
};
use salute_console_domain::table::DeviceTable;
use tokio::task::JoinHandle;

use crate::ports::{DeviceApi, TableView};

/// An operator action that posts a single request to the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Enable or disable the device shown at `row`.
    SetEnabled { row: usize, enabled: bool },
    /// Switch a device feature on or off.
    SetFeature(FeatureUpdateRequest),
    /// Run an administrative command.
    Command(Command),
}

/// Application service driving the device table and operator actions.
pub struct ConsoleService<A, V> {
    api: A,
    view: V,
}

impl<A: DeviceApi, V: TableView> ConsoleService<A, V> {
    /// Create a new service talking to `api` and drawing into `view`.
    pub fn new(api: A, view: V) -> Self {
        Self { api, view }
    }

    /// Fetch the device list and mount a freshly rendered table.
    ///
    /// On failure the view is left untouched and a diagnostic is logged.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Api`] when the bridge cannot be reached,
    /// answers with a non-200 status, or sends an undecodable body, and
    /// [`ConsoleError::Validation`] when a record breaks an invariant, and
    /// [`ConsoleError::View`] when the view fails to display the table.
    #[tracing::instrument(skip(self))]
    pub async fn load_devices(&self) -> Result<usize, ConsoleError> {
        let records = match self.api.fetch_devices().await {
            Ok(records) => records,
            Err(err) => {
                log_fetch_failure(&err);
                return Err(err.into());
            }
        };

        if let Err(err) = validate_snapshot(&records) {
            tracing::error!(error = %err, "device list rejected");
            return Err(err.into());
        }

        let table = DeviceTable::render(&records);
        let rows = table.len();
        if let Err(err) = self.view.mount(table) {
            tracing::error!(error = %err, "device table could not be displayed");
            return Err(err.into());
        }
        tracing::info!(rows, "device table mounted");
        Ok(rows)
    }

    /// Post a device enablement change for the row the operator toggled.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Api`] if the request fails.
    #[tracing::instrument(skip(self))]
    pub async fn set_device_enabled(&self, row: usize, enabled: bool) -> Result<(), ConsoleError> {
        self.post(&DeviceUpdateRequest::for_row(row, enabled)).await
    }

    /// Post a feature flag change.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Api`] if the request fails.
    #[tracing::instrument(skip(self, request), fields(entity_id = %request.entity_id, feature = %request.feature))]
    pub async fn set_feature(&self, request: FeatureUpdateRequest) -> Result<(), ConsoleError> {
        self.post(&request).await
    }

    /// Post an administrative command.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Api`] if the request fails.
    #[tracing::instrument(skip(self, command), fields(command = %command))]
    pub async fn run_command(&self, command: Command) -> Result<(), ConsoleError> {
        self.post(&CommandRequest::new(command)).await
    }

    /// Post an arbitrary JSON payload, to the devices endpoint unless told otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Api`] if the request fails.
    pub async fn send(
        &self,
        payload: serde_json::Value,
        endpoint: Option<Endpoint>,
    ) -> Result<(), ConsoleError> {
        let endpoint = endpoint.unwrap_or_default();
        match self.api.send(payload, endpoint).await {
            Ok(()) => {
                tracing::debug!(%endpoint, "request accepted");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%endpoint, error = %err, "request failed");
                Err(err.into())
            }
        }
    }

    /// Run one operator action to completion.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying request.
    pub async fn perform(&self, action: Action) -> Result<(), ConsoleError> {
        match action {
            Action::SetEnabled { row, enabled } => self.set_device_enabled(row, enabled).await,
            Action::SetFeature(request) => self.set_feature(request).await,
            Action::Command(command) => self.run_command(command).await,
        }
    }

    async fn post<P: Payload>(&self, payload: &P) -> Result<(), ConsoleError> {
        let body = serde_json::to_value(payload).map_err(ApiError::Encode)?;
        self.send(body, Some(P::ENDPOINT)).await
    }
}

impl<A, V> ConsoleService<A, V>
where
    A: DeviceApi + Send + Sync + 'static,
    V: TableView + Send + Sync + 'static,
{
    /// Fire-and-forget: run `action` on its own task.
    ///
    /// Dispatched actions are independent; they may complete in any order.
    /// The returned handle is the only completion and error channel.
    pub fn dispatch(self: &Arc<Self>, action: Action) -> JoinHandle<Result<(), ConsoleError>> {
        let service = Arc::clone(self);
        tokio::spawn(async move { service.perform(action).await })
    }
}

fn log_fetch_failure(err: &ApiError) {
    match err {
        ApiError::Status { status, reason } => {
            tracing::warn!(status, reason = %reason, "device list request returned an error status");
        }
        ApiError::Transport(_) => {
            tracing::error!("device list request failed");
        }
        ApiError::Decode(source) => {
            tracing::error!(error = %source, "device list could not be decoded");
        }
        ApiError::Encode(source) => {
            tracing::error!(error = %source, "device list request could not be encoded");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use salute_console_domain::device::DeviceRecord;
    use salute_console_domain::feature::Feature;
    use salute_console_domain::table::{Cell, Column};
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct StubApi {
        devices: Mutex<Option<Result<Vec<DeviceRecord>, ApiError>>>,
        sent: Mutex<Vec<(Endpoint, serde_json::Value)>>,
        reject_posts_with: Option<u16>,
    }

    impl StubApi {
        fn with_devices(devices: Vec<DeviceRecord>) -> Self {
            Self {
                devices: Mutex::new(Some(Ok(devices))),
                ..Self::default()
            }
        }

        fn failing(err: ApiError) -> Self {
            Self {
                devices: Mutex::new(Some(Err(err))),
                ..Self::default()
            }
        }

        fn sent(&self) -> Vec<(Endpoint, serde_json::Value)> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl DeviceApi for StubApi {
        fn fetch_devices(
            &self,
        ) -> impl Future<Output = Result<Vec<DeviceRecord>, ApiError>> + Send {
            let result = self
                .devices
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(vec![]));
            async { result }
        }

        fn send(
            &self,
            payload: serde_json::Value,
            endpoint: Endpoint,
        ) -> impl Future<Output = Result<(), ApiError>> + Send {
            self.sent.lock().unwrap().push((endpoint, payload));
            let result = match self.reject_posts_with {
                Some(status) => Err(ApiError::Status {
                    status,
                    reason: "Unprocessable Entity".to_string(),
                }),
                None => Ok(()),
            };
            async { result }
        }
    }

    #[derive(Default)]
    struct RecordingView {
        mounted: Mutex<Vec<DeviceTable>>,
        broken: bool,
    }

    impl RecordingView {
        fn mounted(&self) -> Vec<DeviceTable> {
            self.mounted.lock().unwrap().clone()
        }
    }

    impl TableView for RecordingView {
        fn mount(&self, table: DeviceTable) -> std::io::Result<()> {
            if self.broken {
                return Err(std::io::ErrorKind::BrokenPipe.into());
            }
            self.mounted.lock().unwrap().push(table);
            Ok(())
        }
    }

    fn lamp() -> DeviceRecord {
        DeviceRecord::builder()
            .entity_id("lamp1")
            .category("light")
            .enabled(false)
            .name("Lamp")
            .state("off")
            .model("light")
            .build()
    }

    fn make_service(api: StubApi) -> ConsoleService<Arc<StubApi>, Arc<RecordingView>> {
        ConsoleService::new(Arc::new(api), Arc::new(RecordingView::default()))
    }

    #[tokio::test]
    async fn should_mount_rendered_table_after_load() {
        let svc = make_service(StubApi::with_devices(vec![lamp(), lamp()]));

        let rows = svc.load_devices().await.unwrap();
        assert_eq!(rows, 2);

        let mounted = svc.view.mounted();
        assert_eq!(mounted.len(), 1);
        assert_eq!(
            mounted[0].rows()[0].cell(Column::Id),
            &Cell::Text("light.lamp1".to_string())
        );
    }

    #[tokio::test]
    async fn should_not_mount_when_bridge_returns_404() {
        let svc = make_service(StubApi::failing(ApiError::Status {
            status: 404,
            reason: "Not Found".to_string(),
        }));

        let result = svc.load_devices().await;
        assert!(matches!(
            result,
            Err(ConsoleError::Api(ApiError::Status { status: 404, .. }))
        ));
        assert!(svc.view.mounted().is_empty());
    }

    #[tokio::test]
    async fn should_not_mount_when_bridge_is_unreachable() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let svc = make_service(StubApi::failing(ApiError::transport(io)));

        let result = svc.load_devices().await;
        assert!(matches!(result, Err(ConsoleError::Api(ApiError::Transport(_)))));
        assert!(svc.view.mounted().is_empty());
    }

    #[tokio::test]
    async fn should_not_mount_when_request_cannot_be_encoded() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let svc = make_service(StubApi::failing(ApiError::Encode(json_err)));

        let result = svc.load_devices().await;
        assert!(matches!(result, Err(ConsoleError::Api(ApiError::Encode(_)))));
        assert!(svc.view.mounted().is_empty());
    }

    #[tokio::test]
    async fn should_fail_load_when_view_cannot_display_table() {
        let svc = ConsoleService::new(
            StubApi::with_devices(vec![lamp()]),
            RecordingView {
                broken: true,
                ..RecordingView::default()
            },
        );

        let result = svc.load_devices().await;
        assert!(matches!(result, Err(ConsoleError::View(_))));
        assert!(svc.view.mounted().is_empty());
    }

    #[tokio::test]
    async fn should_reject_snapshot_with_blank_entity_id() {
        let mut broken = lamp();
        broken.entity_id = String::new();
        let svc = make_service(StubApi::with_devices(vec![lamp(), broken]));

        let result = svc.load_devices().await;
        assert!(matches!(result, Err(ConsoleError::Validation(_))));
        assert!(svc.view.mounted().is_empty());
    }

    #[tokio::test]
    async fn should_post_exactly_one_device_update_per_toggle() {
        let svc = make_service(StubApi::default());

        svc.set_device_enabled(4, true).await.unwrap();

        let sent = svc.api.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, Endpoint::Devices);
        assert_eq!(
            sent[0].1,
            serde_json::json!({"devices": [{"4": {"enabled": true}}]})
        );
    }

    #[tokio::test]
    async fn should_post_feature_update() {
        let svc = make_service(StubApi::default());

        svc.set_feature(FeatureUpdateRequest::new("lamp1", Feature::Brightness, true))
            .await
            .unwrap();

        let sent = svc.api.sent();
        assert_eq!(sent[0].0, Endpoint::DeviceFeatures);
        assert_eq!(
            sent[0].1,
            serde_json::json!({"entity_id": "lamp1", "feature": "brightness", "state": true})
        );
    }

    #[tokio::test]
    async fn should_post_command() {
        let svc = make_service(StubApi::default());

        svc.run_command(Command::Exit).await.unwrap();

        let sent = svc.api.sent();
        assert_eq!(sent[0].0, Endpoint::Command);
        assert_eq!(sent[0].1, serde_json::json!({"command": "exit"}));
    }

    #[tokio::test]
    async fn should_default_raw_send_to_devices_endpoint() {
        let svc = make_service(StubApi::default());

        svc.send(serde_json::json!({"devices": []}), None)
            .await
            .unwrap();

        assert_eq!(svc.api.sent()[0].0, Endpoint::Devices);
    }

    #[tokio::test]
    async fn should_surface_rejected_post_as_status_error() {
        let svc = make_service(StubApi {
            reject_posts_with: Some(422),
            ..StubApi::default()
        });

        let result = svc.run_command(Command::DbDelete).await;
        assert!(matches!(
            result,
            Err(ConsoleError::Api(ApiError::Status { status: 422, .. }))
        ));
    }

    #[tokio::test]
    async fn should_complete_every_dispatched_action() {
        let svc = Arc::new(make_service(StubApi::default()));

        let handles = vec![
            svc.dispatch(Action::SetEnabled {
                row: 0,
                enabled: true,
            }),
            svc.dispatch(Action::SetEnabled {
                row: 1,
                enabled: false,
            }),
            svc.dispatch(Action::Command(Command::DbDelete)),
        ];
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let mut sent: Vec<String> = svc
            .api
            .sent()
            .into_iter()
            .map(|(_, body)| body.to_string())
            .collect();
        sent.sort();
        assert_eq!(
            sent,
            [
                r#"{"command":"DB_delete"}"#,
                r#"{"devices":[{"0":{"enabled":true}}]}"#,
                r#"{"devices":[{"1":{"enabled":false}}]}"#,
            ]
        );
    }
}
