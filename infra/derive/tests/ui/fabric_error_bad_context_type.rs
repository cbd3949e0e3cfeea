use vfab_derive::fabric_error;

#[fabric_error]
pub enum DemoError {
    #[error("Rejected: {message}")]
    Rejected { message: String, context: Option<String> },
}

fn main() {}
