// mainから呼び出すアプリケーションと卓の管理を行うモジュール
mod console;
pub mod record;
pub mod table;

pub use console::{render_announce, ConsoleApp};
pub use record::{FileStore, MemoryStore, RecordStore, RoundRecord};
pub use table::{Table, TableStatus};
