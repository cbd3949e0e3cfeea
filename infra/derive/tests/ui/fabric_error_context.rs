use std::borrow::Cow;
use vfab_derive::fabric_error;

#[fabric_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err::<(), _>(std::io::Error::other("disk gone")).context("reading settings")?;
    Ok(())
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.to_string(), "IO error (reading settings): disk gone");

    let converted: DemoError = std::io::Error::other("plain").into();
    assert!(matches!(converted, DemoError::Io { context: None, .. }));
}
