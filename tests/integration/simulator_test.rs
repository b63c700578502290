use anyhow::Result;
use pagesim::{simulate, Policy, SimulationError};

#[path = "../common/mod.rs"]
mod common;
use common::{random_reference, run, BELADY, TEXTBOOK};

#[test]
fn test_result_length_matches_reference() -> Result<()> {
    for policy in Policy::ALL {
        for frames in 1..=5 {
            let result = simulate(policy, &TEXTBOOK, frames)?;
            assert_eq!(result.len(), TEXTBOOK.len());

            // Every snapshot keeps the configured number of slots
            for step in &result {
                assert_eq!(step.frames.len(), frames);
            }
        }
    }
    Ok(())
}

#[test]
fn test_steps_preserve_request_order() {
    for policy in Policy::ALL {
        let result = run(policy, &BELADY, 3);
        let pages: Vec<_> = result.iter().map(|step| step.page).collect();
        assert_eq!(pages, BELADY.to_vec());
    }
}

#[test]
fn test_fifo_classic_trace() {
    let result = run(Policy::Fifo, &BELADY, 3);
    assert_eq!(result.fault_count(), 9);
    assert_eq!(result.fault_positions(), vec![0, 1, 2, 3, 4, 5, 6, 9, 10]);
}

#[test]
fn test_fifo_beladys_anomaly() {
    assert_eq!(run(Policy::Fifo, &BELADY, 3).fault_count(), 9);
    assert_eq!(run(Policy::Fifo, &BELADY, 4).fault_count(), 10);
}

#[test]
fn test_lru_textbook_trace() {
    let result = run(Policy::Lru, &[7, 0, 1, 2, 0, 3, 0, 4], 3);
    assert_eq!(result.fault_positions(), vec![0, 1, 2, 3, 5, 7]);

    let faulted: Vec<_> = result.iter().filter(|s| s.fault).map(|s| s.page).collect();
    assert_eq!(faulted, vec![7, 0, 1, 2, 3, 4]);
}

#[test]
fn test_optimal_textbook_trace() {
    assert_eq!(run(Policy::Optimal, &TEXTBOOK, 3).fault_count(), 9);
    assert_eq!(run(Policy::Fifo, &TEXTBOOK, 3).fault_count(), 15);
    assert_eq!(run(Policy::Lru, &TEXTBOOK, 3).fault_count(), 12);
}

#[test]
fn test_optimal_is_a_lower_bound() {
    for seed in 0..50 {
        let reference = random_reference(seed, 40, 8);
        for frames in 1..=6 {
            let optimal = run(Policy::Optimal, &reference, frames).fault_count();
            let fifo = run(Policy::Fifo, &reference, frames).fault_count();
            let lru = run(Policy::Lru, &reference, frames).fault_count();
            assert!(
                optimal <= fifo && optimal <= lru,
                "seed {} frames {}: optimal {} fifo {} lru {}",
                seed, frames, optimal, fifo, lru
            );
        }
    }
}

#[test]
fn test_rerun_is_identical() {
    let reference = random_reference(7, 30, 6);
    for policy in Policy::ALL {
        assert_eq!(run(policy, &reference, 4), run(policy, &reference, 4));
    }
}

#[test]
fn test_single_frame_replaces_slot_zero() {
    let reference = [1, 2, 2, 3, 1, 1];
    for policy in Policy::ALL {
        let result = run(policy, &reference, 1);
        assert_eq!(result.fault_positions(), vec![0, 1, 3, 4]);
        for (step, &page) in result.iter().zip(reference.iter()) {
            assert_eq!(step.frames.slots(), &[Some(page)]);
            if step.fault {
                assert_eq!(step.slot, Some(0));
            }
        }
    }
}

#[test]
fn test_single_request() {
    for policy in Policy::ALL {
        let result = run(policy, &[42], 4);
        assert_eq!(result.len(), 1);
        let step = &result.steps[0];
        assert!(step.fault);
        assert_eq!(step.frames.slots(), &[Some(42), None, None, None]);
    }
}

#[test]
fn test_identical_pages_fault_once() {
    for policy in Policy::ALL {
        for frames in 1..=3 {
            let result = run(policy, &[5, 5, 5, 5], frames);
            assert_eq!(result.fault_positions(), vec![0]);
        }
    }
}

#[test]
fn test_no_duplicate_residents() {
    let reference = random_reference(99, 60, 5);
    for policy in Policy::ALL {
        for step in &run(policy, &reference, 3) {
            let mut resident: Vec<_> = step.frames.resident().map(|(_, page)| page).collect();
            let count = resident.len();
            resident.sort();
            resident.dedup();
            assert_eq!(resident.len(), count);
            assert!(step.frames.contains(step.page));
        }
    }
}

#[test]
fn test_zero_frames_rejected() {
    assert_eq!(
        simulate(Policy::Lru, &[1], 0),
        Err(SimulationError::InvalidFrameCount(0))
    );
}

#[test]
fn test_result_serializes_to_json() -> Result<()> {
    let result = run(Policy::Fifo, &[1, 2], 2);
    let json = serde_json::to_value(&result)?;

    assert_eq!(json["policy"], "fifo");
    assert_eq!(json["frame_count"], 2);
    assert_eq!(json["steps"][1]["frames"], serde_json::json!([1, 2]));
    assert_eq!(json["steps"][0]["frames"], serde_json::json!([1, null]));
    assert_eq!(json["steps"][1]["fault"], true);
    Ok(())
}
