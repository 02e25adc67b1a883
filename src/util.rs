/// Unwraps a `Result`, logging the message and returning `None` on `Err`
#[macro_export]
macro_rules! unwrap_or_return {
    ($result:expr, $message:literal) => {
        match $result {
            Ok(value) => value,
            Err(e) => {
                warn!("{} (error {})", $message, e);
                return None;
            }
        }
    };
}
