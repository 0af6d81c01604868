mod ad_request_form;

pub use ad_request_form::AdRequestForm;
