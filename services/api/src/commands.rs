use clap::Args;
use std::path::{Path, PathBuf};
use wsdc_submissions::error::AppError;
use wsdc_submissions::submissions::decode::request_from_slice;
use wsdc_submissions::submissions::{
    ServiceResponse, SubmissionAction, SubmissionResultResponse, SubmissionService,
};

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// Path to a JSON results submission
    #[arg(long)]
    pub(crate) file: PathBuf,
    /// Run the submit path instead of the dry-run validation
    #[arg(long)]
    pub(crate) submit: bool,
}

/// Exit status reflects infrastructure failures only; defects are part of the printed
/// envelope.
pub(crate) fn run_validate(args: ValidateArgs) -> Result<(), AppError> {
    let action = if args.submit {
        SubmissionAction::Submit
    } else {
        SubmissionAction::Validate
    };
    let envelope = check_file(&args.file, action)?;
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

pub(crate) fn check_file(
    path: &Path,
    action: SubmissionAction,
) -> Result<ServiceResponse<SubmissionResultResponse>, AppError> {
    let bytes = std::fs::read(path)?;
    let service = SubmissionService::new();
    let envelope = match request_from_slice(&bytes) {
        Ok(request) => service.process(action, request.as_ref(), None),
        Err(err) => ServiceResponse::malformed(err.to_string()),
    };
    Ok(envelope)
}
