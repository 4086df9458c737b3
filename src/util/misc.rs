use std::fmt;
use std::path::Path;

use crate::error;

pub type Res<T = ()> = Result<T, Box<dyn std::error::Error>>;

pub fn next_value<T>(it: &mut std::slice::Iter<'_, String>, opt: &str) -> T
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let n = it
        .next()
        .unwrap_or_else(|| error_exit(format!("{}: value missing", opt)));
    n.parse()
        .unwrap_or_else(|e| error_exit(format!("{}: {} '{}'", opt, e, n)))
}

pub fn unixtime_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

// 入力待ち 入力が終了(EOF)した場合はNone
pub fn prompt() -> Option<String> {
    use std::io::{stdin, stdout, Write};
    print!("> ");
    stdout().flush().ok();
    let mut buf = String::new();
    match stdin().read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf.trim().to_string()),
    }
}

pub fn error_exit<T: fmt::Display, U>(t: T) -> U {
    error!("{}", t);
    std::process::exit(1);
}

pub fn write_to_file(path: &Path, data: &[u8]) -> Res {
    if let Some(prefix) = path.parent() {
        std::fs::create_dir_all(prefix)?;
    }
    std::fs::write(path, data)?;
    Ok(())
}

pub fn vec_to_string<T: fmt::Display>(v: &[T]) -> String {
    let vs: Vec<String> = v.iter().map(|x| format!("{}", x)).collect();
    "[".to_string() + &vs.join(", ") + "]"
}

#[test]
fn test_vec_helpers() {
    assert_eq!(vec_to_string(&[1, 2, 3]), "[1, 2, 3]");
    assert_eq!(vec_to_string::<i32>(&[]), "[]");
}
