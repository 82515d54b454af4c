mod report_request;
mod report_response;

pub use report_request::ReportRequest;
pub use report_response::ReportResponse;
