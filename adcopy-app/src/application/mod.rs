mod generate_ad_copy;
mod response_validator;

pub use generate_ad_copy::GenerateAdCopy;
pub use response_validator::ResponseValidator;
