use crate::domain::model::{UploadRequest, UploadResult};
use crate::utils::error::{Result, VerifyError};
use std::io::Write;

const RULE_WIDTH: usize = 60;

/// Renders one verification cycle for the operator.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn heading(&mut self, title: &str) -> std::io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "{}", rule)
    }

    pub fn banner(&mut self, endpoint: &str, request: &UploadRequest) -> Result<()> {
        self.heading("TESTING SERVER UPLOAD")?;
        writeln!(self.out, "Server URL: {}", endpoint)?;
        writeln!(self.out, "File: {}", request.filename)?;
        writeln!(
            self.out,
            "Content length: {} characters",
            request.content_length()
        )?;
        writeln!(self.out)?;
        writeln!(self.out, "Uploading...")?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn response(&mut self, result: &UploadResult) -> Result<()> {
        let pretty = serde_json::to_string_pretty(&result.body)?;

        self.heading("RESPONSE FROM SERVER")?;
        writeln!(self.out, "Status Code: {}", result.status_code)?;
        writeln!(self.out)?;
        writeln!(self.out, "Response Body:")?;
        writeln!(self.out, "{}", pretty)?;
        writeln!(self.out)?;
        self.heading("CHECK THE SERVER CONSOLE FOR VALIDATION LOGGING!")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn failure(&mut self, error: &VerifyError) -> Result<()> {
        writeln!(self.out, "❌ ERROR: {}", error.user_friendly_message())?;

        if let VerifyError::ResponseParseError { status, body, .. } = error {
            writeln!(self.out, "   Status Code: {}", status)?;
            writeln!(self.out, "   Raw Body:")?;
            writeln!(self.out, "{}", body)?;
        }

        for line in error.recovery_suggestion() {
            writeln!(self.out, "   {}", line)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
