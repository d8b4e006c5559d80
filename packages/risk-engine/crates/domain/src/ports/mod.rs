pub mod report_sink;
