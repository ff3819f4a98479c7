//! hive2md engine: chain access, image downloads, persistence and the archive pipeline.
mod chain;
mod fetch;
mod materialize;
mod persist;
mod pipeline;
mod sink;
mod types;

pub use chain::{ChainError, ChainReader, CondenserClient};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use materialize::{ImageError, ImageMaterializer, MaterializedBody};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use pipeline::{Archiver, PipelineError};
pub use sink::{LogSink, ProgressSink};
pub use types::{ArchiveEvent, FailureKind, FetchError, RunSummary};
