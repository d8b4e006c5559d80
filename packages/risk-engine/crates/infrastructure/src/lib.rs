pub mod adapters;

pub use adapters::csv_sink::CsvReportSink;
