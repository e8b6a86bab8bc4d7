//! Tests for the placement state machine

#[cfg(test)]
mod tests {
    use mosaicist::algorithm::{PlacementPhase, PlacementRun};
    use mosaicist::spatial::Rect;
    use mosaicist::spatial::crop::FULL_SOURCE;
    use mosaicist::{LayoutError, PlacementRecord};

    fn record(index: usize) -> PlacementRecord {
        PlacementRecord::rect(
            format!("img{index}.jpg"),
            index,
            Rect::new(index as f64, 0.0, 1.0, 1.0),
            FULL_SOURCE,
        )
    }

    // Tests the phase advances through Placing to Done
    // Verified by never leaving Init
    #[test]
    fn test_phases_advance() -> mosaicist::Result<()> {
        let mut run = PlacementRun::new(2);
        assert_eq!(run.phase(), PlacementPhase::Init);
        run.place(record(0))?;
        assert_eq!(run.phase(), PlacementPhase::Placing(1));
        assert_eq!(run.remaining(), 1);
        run.place(record(1))?;
        assert_eq!(run.phase(), PlacementPhase::Done);

        let outcome = run.finish()?;
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.fallback_count, 0);
        Ok(())
    }

    // Tests a fallback stays visible in the phase until the next record
    // Verified by overwriting the phase with Placing inside fall_back
    #[test]
    fn test_fallback_then_place() -> mosaicist::Result<()> {
        let mut run = PlacementRun::new(4);
        run.place(record(0))?;
        run.fall_back(record(1))?;
        assert_eq!(run.phase(), PlacementPhase::Fallback(1));
        assert_eq!(run.fallback_count(), 1);
        assert_eq!(run.remaining(), 2);

        run.fall_back(record(2))?;
        assert_eq!(run.phase(), PlacementPhase::Fallback(2));
        run.place(record(3))?;
        assert_eq!(run.phase(), PlacementPhase::Done);

        let outcome = run.finish()?;
        assert_eq!(outcome.fallback_count, 2);
        let indices: Vec<usize> = outcome.records.iter().map(|r| r.item_index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        Ok(())
    }

    // Tests a fallback producing the last record completes the run
    // Verified by leaving the phase at Fallback after the final record
    #[test]
    fn test_final_fallback_finishes() -> mosaicist::Result<()> {
        let mut run = PlacementRun::new(2);
        run.place(record(0))?;
        run.fall_back(record(1))?;
        assert_eq!(run.phase(), PlacementPhase::Done);
        assert_eq!(run.finish()?.fallback_count, 1);
        Ok(())
    }

    // Tests emitting past the expected count is a computation error
    // Verified by allowing records in the Done phase
    #[test]
    fn test_extra_record_rejected() -> mosaicist::Result<()> {
        let mut run = PlacementRun::new(1);
        run.place(record(0))?;
        assert!(matches!(
            run.place(record(1)),
            Err(LayoutError::Computation { .. })
        ));
        assert_eq!(run.placed(), 1);
        Ok(())
    }

    // Tests an unfinished run cannot be closed
    // Verified by finishing from any phase
    #[test]
    fn test_finish_requires_done() -> mosaicist::Result<()> {
        let mut run = PlacementRun::new(3);
        run.place(record(0))?;
        assert!(run.finish().is_err());
        Ok(())
    }

    // Tests a failed run rejects further records and passes the error through
    // Verified by leaving the phase unchanged in fail
    #[test]
    fn test_fail_enters_error_phase() {
        let mut run = PlacementRun::new(2);
        let error = run.fail(LayoutError::NoSpaceAvailable { remaining_items: 2 });
        assert!(matches!(error, LayoutError::NoSpaceAvailable { remaining_items: 2 }));
        assert_eq!(run.phase(), PlacementPhase::Error);
        assert!(run.place(record(0)).is_err());
    }
}
