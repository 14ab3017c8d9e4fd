//! Mocking
//!
//! TigerStyle: Services take their collaborators as `Arc<dyn Trait>`.
//!
//! ```text
//! ┌──────────────────┐      ┌────────────────────────────┐
//! │     Service      │ ───▶ │        Seam Trait          │
//! └──────────────────┘      └────────────────────────────┘
//!                              ↑            ↑          ↑
//!                      InMemory*/Fs*      Sim*     test stubs
//!                      (production)   (recording,
//!                                   fault injection)
//! ```
//!
//! `Sim*` collaborators record every call so tests can verify interactions,
//! and take a `dst::FaultInjector` so failure paths are driven by seed.

pub mod booking;
pub mod employee;
pub mod housekeeper;
pub mod installer;
pub mod order;
pub mod product;
pub mod video;

pub use booking::{
    overlapping_booking, Booking, BookingError, BookingId, BookingRepository, BookingStatus,
    InMemoryBookingRepository,
};
pub use employee::{
    ActionResult, Employee, EmployeeController, EmployeeError, EmployeeId, EmployeeStorage,
    InMemoryEmployeeStorage, SimEmployeeStorage,
};
pub use housekeeper::{
    EmailError, EmailSender, FsStatementGenerator, Housekeeper, HousekeeperError,
    HousekeeperRepository, HousekeeperService, InMemoryHousekeeperRepository, MessageBox,
    MessageBoxButtons, SimEmailSender, SimMessageBox, SimStatementGenerator, StatementGenerator,
    StatementRun,
};
pub use installer::{DownloadError, FileDownloader, InstallerHelper, SimFileDownloader};
pub use order::{Order, OrderError, OrderId, OrderService, OrderStorage, SimOrderStorage};
pub use product::{Customer, Product};
pub use video::{
    FileReader, FsFileReader, InMemoryVideoRepository, SimFileReader, Video, VideoError,
    VideoRepository, VideoService,
};
