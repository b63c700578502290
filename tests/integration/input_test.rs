use anyhow::Result;
use pagesim::input::{clamp_frame_count, parse_reference_string, validate_frame_count};
use pagesim::{InputConfig, InputError, Policy, SimulationRequest};

#[test]
fn test_request_from_user_text() -> Result<()> {
    let config = InputConfig::default();
    let request = SimulationRequest::parse("7, 0, 1, 2, 0, 3, 0, 4", 3, Policy::Lru, &config)?;
    let result = request.run()?;

    assert_eq!(result.len(), 8);
    assert_eq!(result.fault_count(), 6);
    Ok(())
}

#[test]
fn test_malformed_input_never_reaches_simulator() {
    let config = InputConfig::default();
    let err = SimulationRequest::parse("1, two, 3", 3, Policy::Fifo, &config).unwrap_err();
    assert_eq!(
        err,
        InputError::MalformedToken { position: 2, token: "two".to_string() }
    );
    assert_eq!(
        err.to_string(),
        "Invalid reference string: token 2 ('two') is not a page number"
    );
}

#[test]
fn test_empty_input_message() {
    let err = parse_reference_string("  ", &InputConfig::default()).unwrap_err();
    assert_eq!(err.to_string(), "Please enter a valid reference string");
}

#[test]
fn test_frame_limits_follow_config() {
    let config = InputConfig { min_frames: 2, max_frames: 4, ..InputConfig::default() };

    assert!(validate_frame_count(1, &config).is_err());
    assert_eq!(validate_frame_count(4, &config), Ok(4));
    assert_eq!(clamp_frame_count(1, &config), 2);
    assert_eq!(clamp_frame_count(9, &config), 4);

    let err = validate_frame_count(5, &config).unwrap_err();
    assert_eq!(err.to_string(), "Number of frames must be between 2 and 4, got 5");
}

#[test]
fn test_with_policy_keeps_workload() -> Result<()> {
    let request = SimulationRequest::parse("1,2,3,4,1,2,5,1,2,3,4,5", 3, Policy::Fifo, &InputConfig::default())?;
    let optimal = request.with_policy(Policy::Optimal);

    assert_eq!(optimal.reference, request.reference);
    assert_eq!(optimal.frame_count, 3);
    assert_eq!(request.run()?.fault_count(), 9);
    assert_eq!(optimal.run()?.fault_count(), 7);
    Ok(())
}
