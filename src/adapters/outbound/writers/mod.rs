/// Report writer adapters, one per output format
mod delimited_writer;
mod markdown_table_writer;
mod table_layout;
mod table_writer;

pub use delimited_writer::DelimitedWriter;
pub use markdown_table_writer::MarkdownTableWriter;
pub use table_layout::TableLayout;
pub use table_writer::TableWriter;
