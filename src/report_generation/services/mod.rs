pub mod ignore_filter;

pub use ignore_filter::IgnoreFilter;
