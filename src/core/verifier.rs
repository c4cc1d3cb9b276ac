use crate::adapters::{HttpTransport, LocalStorage};
use crate::core::report::Reporter;
use crate::domain::model::{RawResponse, UploadRequest, UploadResult};
use crate::domain::ports::{ConfigProvider, Storage, Transport};
use crate::utils::error::{ExitStatus, Result, VerifyError};
use std::io::Write;
use std::path::Path;

/// Runs the load → request → report cycle against one endpoint.
pub struct UploadVerifier<S: Storage, T: Transport> {
    storage: S,
    transport: T,
}

impl UploadVerifier<LocalStorage, HttpTransport> {
    /// Working-directory storage and a default reqwest client.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(LocalStorage::default(), HttpTransport::new()?))
    }
}

impl<S: Storage, T: Transport> UploadVerifier<S, T> {
    pub fn new(storage: S, transport: T) -> Self {
        Self { storage, transport }
    }

    /// Reads the whole file. There is no size limit.
    pub async fn load_request(&self, file_path: &str) -> Result<UploadRequest> {
        let filename = Path::new(file_path)
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| VerifyError::MissingFileNameError {
                path: file_path.to_string(),
            })?
            .to_string();

        let bytes = self.storage.read_file(file_path).await?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), file_path);

        let content = String::from_utf8(bytes).map_err(|source| VerifyError::EncodingError {
            path: file_path.to_string(),
            source,
        })?;

        Ok(UploadRequest::new(filename, content))
    }

    pub async fn send(&self, endpoint: &str, request: &UploadRequest) -> Result<UploadResult> {
        let raw = self
            .transport
            .post_json(endpoint, request)
            .await
            .map_err(|failure| VerifyError::from_transport(endpoint, failure))?;
        parse_response(raw)
    }

    pub async fn verify(&self, file_path: &str, endpoint: &str) -> Result<UploadResult> {
        let request = self.load_request(file_path).await?;
        self.send(endpoint, &request).await
    }

    /// One full cycle with console output. Any received JSON response counts
    /// as success whatever its HTTP status.
    pub async fn run_verification<W: Write>(
        &self,
        file_path: &str,
        endpoint: &str,
        out: W,
    ) -> ExitStatus {
        let mut reporter = Reporter::new(out);

        match self.cycle(file_path, endpoint, &mut reporter).await {
            Ok(result) => {
                tracing::info!(
                    "Verification cycle completed with HTTP {}",
                    result.status_code
                );
                ExitStatus::Success
            }
            Err(e) => report_failure(&e, reporter.into_inner()),
        }
    }

    pub async fn run_with_config<C: ConfigProvider, W: Write>(
        &self,
        config: &C,
        out: W,
    ) -> ExitStatus {
        self.run_verification(config.file_path(), config.endpoint(), out)
            .await
    }

    async fn cycle<W: Write>(
        &self,
        file_path: &str,
        endpoint: &str,
        reporter: &mut Reporter<W>,
    ) -> Result<UploadResult> {
        let request = self.load_request(file_path).await?;
        reporter.banner(endpoint, &request)?;

        let result = self.send(endpoint, &request).await?;
        reporter.response(&result)?;
        Ok(result)
    }
}

/// Accept any status; the body only has to be well-formed JSON.
pub fn parse_response(raw: RawResponse) -> Result<UploadResult> {
    match serde_json::from_str(&raw.body) {
        Ok(body) => Ok(UploadResult {
            status_code: raw.status,
            body,
        }),
        Err(source) => Err(VerifyError::ResponseParseError {
            status: raw.status,
            body: raw.body,
            source,
        }),
    }
}

/// Verify `file_path` against `endpoint` with the default adapters, reporting to stdout.
pub async fn run_verification(file_path: &str, endpoint: &str) -> ExitStatus {
    match UploadVerifier::with_defaults() {
        Ok(verifier) => {
            verifier
                .run_verification(file_path, endpoint, std::io::stdout())
                .await
        }
        Err(e) => report_failure(&e, std::io::stdout()),
    }
}

/// Log `error`, print it for the operator and pick the exit status.
pub fn report_failure<W: Write>(error: &VerifyError, out: W) -> ExitStatus {
    tracing::error!("Verification failed: {} (Kind: {:?})", error, error.kind());
    if let Err(report_err) = Reporter::new(out).failure(error) {
        tracing::error!("Could not write failure report: {}", report_err);
    }
    error.exit_status()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TransportFailure;
    use crate::utils::error::ErrorKind;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MemoryStorage {
        files: HashMap<String, Vec<u8>>,
    }

    impl Storage for MemoryStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| VerifyError::FileAccessError {
                    path: path.to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
                })
        }
    }

    struct CannedTransport {
        reply: std::result::Result<RawResponse, TransportFailure>,
        sent: Mutex<Vec<UploadRequest>>,
    }

    #[async_trait]
    impl Transport for CannedTransport {
        async fn post_json(
            &self,
            _endpoint: &str,
            request: &UploadRequest,
        ) -> std::result::Result<RawResponse, TransportFailure> {
            self.sent.lock().unwrap().push(request.clone());
            self.reply.clone()
        }
    }

    fn verifier(
        files: Vec<(&str, Vec<u8>)>,
        reply: std::result::Result<RawResponse, TransportFailure>,
    ) -> UploadVerifier<MemoryStorage, CannedTransport> {
        let files = files
            .into_iter()
            .map(|(name, data)| (name.to_string(), data))
            .collect();
        UploadVerifier::new(
            MemoryStorage { files },
            CannedTransport {
                reply,
                sent: Mutex::new(Vec::new()),
            },
        )
    }

    fn ok_reply(status: u16, body: &str) -> std::result::Result<RawResponse, TransportFailure> {
        Ok(RawResponse {
            status,
            body: body.to_string(),
        })
    }

    #[tokio::test]
    async fn test_request_uses_base_name_and_exact_content() {
        let v = verifier(vec![("data/sample.xml", b"<a/>\r\n".to_vec())], ok_reply(200, "{}"));
        let request = v.load_request("data/sample.xml").await.unwrap();

        assert_eq!(request.filename, "sample.xml");
        assert_eq!(request.content, "<a/>\r\n");
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_file_access_kind() {
        let v = verifier(vec![("bad.xml", vec![0xff, 0xfe, 0x00])], ok_reply(200, "{}"));
        let err = v.load_request("bad.xml").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileAccess);
    }

    #[tokio::test]
    async fn test_missing_file_sends_nothing() {
        let v = verifier(vec![], ok_reply(200, "{}"));
        let mut out = Vec::new();

        let status = v.run_verification("nope.xml", "http://localhost/upload", &mut out).await;

        assert_eq!(status, ExitStatus::Failure);
        assert!(v.transport.sent.lock().unwrap().is_empty());
        let output = String::from_utf8(out).unwrap();
        assert!(!output.contains("Uploading..."));
        assert!(output.contains("❌ ERROR:"));
    }

    #[tokio::test]
    async fn test_error_status_still_succeeds() {
        let v = verifier(
            vec![("sample.xml", b"<a/>".to_vec())],
            ok_reply(400, r#"{"error":"invalid xml"}"#),
        );
        let result = v.verify("sample.xml", "http://localhost/upload").await.unwrap();

        assert_eq!(result.status_code, 400);
        assert_eq!(result.body, serde_json::json!({"error": "invalid xml"}));
    }

    #[tokio::test]
    async fn test_refused_connection_maps_to_connection_error() {
        let v = verifier(
            vec![("sample.xml", b"<a/>".to_vec())],
            Err(TransportFailure::connection_refused("connection refused")),
        );
        let err = v.verify("sample.xml", "http://localhost/upload").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Connection);
    }

    fn render_response(body: &str) -> String {
        let result = parse_response(RawResponse {
            status: 200,
            body: body.to_string(),
        })
        .unwrap();
        let mut reporter = Reporter::new(Vec::new());
        reporter.response(&result).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_response_keys_print_in_server_order() {
        let output = render_response(r#"{"success":true,"message":"Uploaded","errors":[]}"#);

        let success = output.find("\"success\"").unwrap();
        let message = output.find("\"message\"").unwrap();
        let errors = output.find("\"errors\"").unwrap();
        assert!(success < message && message < errors, "{}", output);
    }

    #[test]
    fn test_numbers_print_exactly_as_received() {
        let big = render_response(r#"{"id":123456789012345678901234567890}"#);
        assert!(big.contains("\"id\": 123456789012345678901234567890"), "{}", big);

        let huge = render_response(r#"{"x":1e400}"#);
        assert!(huge.contains("\"x\": 1e400"), "{}", huge);
    }

    #[test]
    fn test_parse_response_rejects_non_json() {
        let err = parse_response(RawResponse {
            status: 500,
            body: "Internal Server Error".into(),
        })
        .unwrap_err();

        match err {
            VerifyError::ResponseParseError { status, body, .. } => {
                assert_eq!(status, 500);
                assert_eq!(body, "Internal Server Error");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
