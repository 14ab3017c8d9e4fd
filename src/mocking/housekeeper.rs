//! Housekeeper Statements
//!
//! TigerStyle: Four seams (repository, statement generator, mailer, message
//! box), one loop. A failed email is reported and the run continues.
//!
//! Flow per housekeeper:
//! 1. Skip if the email address is absent or blank
//! 2. Generate the statement file
//! 3. Skip if no file name came back
//! 4. Email the file; on failure show a message box

use std::path::PathBuf;
use std::sync::{Arc, PoisonError};

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};

use crate::constants::{STATEMENT_COMPANY_NAME, STATEMENT_FILE_EXTENSION};
use crate::dst::{FaultInjector, FaultType};

// =============================================================================
// Types
// =============================================================================

/// A housekeeper who receives monthly statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Housekeeper {
    /// Object id
    pub oid: u64,
    /// Full name
    pub full_name: String,
    /// Email address, if known
    pub email: Option<String>,
    /// Body of the statement email
    pub statement_email_body: String,
}

/// Buttons on a message box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageBoxButtons {
    Ok,
}

/// Outcome of a statement run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatementRun {
    /// Statements generated
    pub generated: usize,
    /// Statements emailed
    pub emailed: usize,
    /// Emails that failed to send
    pub failed: usize,
}

// =============================================================================
// Seams
// =============================================================================

/// Source of housekeepers.
#[async_trait]
pub trait HousekeeperRepository: Send + Sync {
    /// All housekeepers.
    async fn housekeepers(&self) -> Result<Vec<Housekeeper>, HousekeeperError>;
}

/// Produces statement files.
#[async_trait]
pub trait StatementGenerator: Send + Sync {
    /// Save a statement and return its file name, if one was produced.
    async fn save_statement(
        &self,
        oid: u64,
        full_name: &str,
        statement_date: NaiveDate,
    ) -> Result<Option<String>, HousekeeperError>;
}

/// Sends email with an attachment.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Email `filename` to `email_address`.
    async fn email_file(
        &self,
        email_address: &str,
        body: &str,
        filename: &str,
        subject: &str,
    ) -> Result<(), EmailError>;
}

/// Shows a message to the operator.
pub trait MessageBox: Send + Sync {
    /// Display a message.
    fn show(&self, message: &str, title: &str, buttons: MessageBoxButtons);
}

// =============================================================================
// Service
// =============================================================================

/// Generates and emails housekeeper statements.
pub struct HousekeeperService {
    repository: Arc<dyn HousekeeperRepository>,
    statement_generator: Arc<dyn StatementGenerator>,
    email_sender: Arc<dyn EmailSender>,
    message_box: Arc<dyn MessageBox>,
}

impl HousekeeperService {
    /// Create a service.
    pub fn new(
        repository: Arc<dyn HousekeeperRepository>,
        statement_generator: Arc<dyn StatementGenerator>,
        email_sender: Arc<dyn EmailSender>,
        message_box: Arc<dyn MessageBox>,
    ) -> Self {
        Self {
            repository,
            statement_generator,
            email_sender,
            message_box,
        }
    }

    /// Email every housekeeper their statement for `statement_date`.
    ///
    /// # Errors
    /// Propagates repository and statement generation failures. Email
    /// failures are shown in a message box and counted, not returned.
    pub async fn send_statement_emails(
        &self,
        statement_date: NaiveDate,
    ) -> Result<StatementRun, HousekeeperError> {
        let housekeepers = self.repository.housekeepers().await?;
        let mut run = StatementRun::default();

        for housekeeper in &housekeepers {
            let Some(email) = non_blank(housekeeper.email.as_deref()) else {
                continue;
            };

            let filename = self
                .statement_generator
                .save_statement(housekeeper.oid, &housekeeper.full_name, statement_date)
                .await?;
            run.generated += 1;

            let Some(filename) = non_blank(filename.as_deref()) else {
                continue;
            };

            let subject = statement_subject(&housekeeper.full_name, statement_date);
            match self
                .email_sender
                .email_file(email, &housekeeper.statement_email_body, filename, &subject)
                .await
            {
                Ok(()) => run.emailed += 1,
                Err(e) => {
                    run.failed += 1;
                    tracing::error!(oid = housekeeper.oid, error = %e, "Failed to email statement");
                    self.message_box.show(
                        &e.to_string(),
                        &format!("Email failure: {}", email),
                        MessageBoxButtons::Ok,
                    );
                }
            }
        }

        tracing::info!(
            generated = run.generated,
            emailed = run.emailed,
            failed = run.failed,
            "Statement run complete"
        );

        Ok(run)
    }
}

/// Subject line of a statement email.
#[must_use]
pub fn statement_subject(full_name: &str, statement_date: NaiveDate) -> String {
    format!(
        "{} Statement {} for {}",
        STATEMENT_COMPANY_NAME,
        statement_date.format("%Y-%m"),
        full_name
    )
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

// =============================================================================
// Implementations
// =============================================================================

/// Housekeepers held in memory.
///
/// `StorageReadFail` faults surface as `HousekeeperError::Repository`.
#[derive(Debug, Default)]
pub struct InMemoryHousekeeperRepository {
    housekeepers: RwLock<Vec<Housekeeper>>,
    faults: Mutex<FaultInjector>,
}

impl InMemoryHousekeeperRepository {
    /// Create a repository holding `housekeepers`.
    #[must_use]
    pub fn with_housekeepers(housekeepers: Vec<Housekeeper>) -> Self {
        Self::with_faults(housekeepers, FaultInjector::disabled())
    }

    /// Create a repository whose reads are driven by a fault injector.
    #[must_use]
    pub fn with_faults(housekeepers: Vec<Housekeeper>, faults: FaultInjector) -> Self {
        Self {
            housekeepers: RwLock::new(housekeepers),
            faults: Mutex::new(faults),
        }
    }
}

#[async_trait]
impl HousekeeperRepository for InMemoryHousekeeperRepository {
    async fn housekeepers(&self) -> Result<Vec<Housekeeper>, HousekeeperError> {
        if self.faults.lock().await.should_inject(FaultType::StorageReadFail) {
            return Err(HousekeeperError::Repository(
                "simulated read failure".to_string(),
            ));
        }
        Ok(self.housekeepers.read().await.clone())
    }
}

/// Writes statements as text files under a directory.
#[derive(Debug, Clone)]
pub struct FsStatementGenerator {
    dir: PathBuf,
}

impl FsStatementGenerator {
    /// Write statements into `dir` (created on first use).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl StatementGenerator for FsStatementGenerator {
    async fn save_statement(
        &self,
        oid: u64,
        full_name: &str,
        statement_date: NaiveDate,
    ) -> Result<Option<String>, HousekeeperError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let filename = format!(
            "statement_{}_{}.{}",
            oid,
            statement_date.format("%Y-%m"),
            STATEMENT_FILE_EXTENSION
        );
        let path = self.dir.join(&filename);
        let contents = format!(
            "{}\nStatement for {} ({})\n",
            STATEMENT_COMPANY_NAME,
            full_name,
            statement_date.format("%Y-%m")
        );
        tokio::fs::write(&path, contents).await?;

        tracing::debug!(oid, path = %path.display(), "Saved statement");
        Ok(Some(path.to_string_lossy().into_owned()))
    }
}

// =============================================================================
// Simulated Collaborators
// =============================================================================

/// Statement generator returning a fixed file name and recording calls.
#[derive(Debug)]
pub struct SimStatementGenerator {
    filename: Option<String>,
    calls: Mutex<Vec<(u64, String, NaiveDate)>>,
}

impl SimStatementGenerator {
    /// Generator that answers every call with `filename`.
    #[must_use]
    pub fn returning(filename: Option<&str>) -> Self {
        Self {
            filename: filename.map(str::to_string),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `(oid, full_name, date)` of every call.
    pub async fn calls(&self) -> Vec<(u64, String, NaiveDate)> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl StatementGenerator for SimStatementGenerator {
    async fn save_statement(
        &self,
        oid: u64,
        full_name: &str,
        statement_date: NaiveDate,
    ) -> Result<Option<String>, HousekeeperError> {
        self.calls
            .lock()
            .await
            .push((oid, full_name.to_string(), statement_date));
        Ok(self.filename.clone())
    }
}

/// A captured email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub email_address: String,
    pub body: String,
    pub filename: String,
    pub subject: String,
}

#[derive(Debug)]
struct SimEmailState {
    sent: Vec<SentEmail>,
    faults: FaultInjector,
}

/// Email sender that records instead of sending.
///
/// `EmailSendFail` faults fail the send; failed sends are not recorded.
#[derive(Debug)]
pub struct SimEmailSender {
    state: Mutex<SimEmailState>,
}

impl SimEmailSender {
    /// Sender that always succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self::with_faults(FaultInjector::disabled())
    }

    /// Sender driven by a fault injector.
    #[must_use]
    pub fn with_faults(faults: FaultInjector) -> Self {
        Self {
            state: Mutex::new(SimEmailState {
                sent: Vec::new(),
                faults,
            }),
        }
    }

    /// Emails sent so far.
    pub async fn sent(&self) -> Vec<SentEmail> {
        self.state.lock().await.sent.clone()
    }
}

impl Default for SimEmailSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailSender for SimEmailSender {
    async fn email_file(
        &self,
        email_address: &str,
        body: &str,
        filename: &str,
        subject: &str,
    ) -> Result<(), EmailError> {
        let mut state = self.state.lock().await;

        if state.faults.should_inject(FaultType::EmailSendFail) {
            return Err(EmailError::Send(format!(
                "simulated failure sending to {}",
                email_address
            )));
        }

        state.sent.push(SentEmail {
            email_address: email_address.to_string(),
            body: body.to_string(),
            filename: filename.to_string(),
            subject: subject.to_string(),
        });
        Ok(())
    }
}

/// A captured message box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownMessage {
    pub message: String,
    pub title: String,
    pub buttons: MessageBoxButtons,
}

/// Message box that records what it was asked to show.
#[derive(Debug, Default)]
pub struct SimMessageBox {
    shown: std::sync::Mutex<Vec<ShownMessage>>,
}

impl SimMessageBox {
    /// Create a recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages shown so far.
    #[must_use]
    pub fn shown(&self) -> Vec<ShownMessage> {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl MessageBox for SimMessageBox {
    fn show(&self, message: &str, title: &str, buttons: MessageBoxButtons) {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ShownMessage {
                message: message.to_string(),
                title: title.to_string(),
                buttons,
            });
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Statement run errors
#[derive(Debug, thiserror::Error)]
pub enum HousekeeperError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("housekeeper repository unavailable: {0}")]
    Repository(String),
}

/// Email sending errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("failed to send email: {0}")]
    Send(String),
}

// =============================================================================
// Tests
// =============================================================================
