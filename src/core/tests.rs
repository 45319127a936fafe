#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;
    use std::time::Duration;

    use crate::core::{
        AUTOPLAY_INTERVAL, DemoPlanner, PlaybackMode, RotationController, SubmitError,
        TestimonialStore,
    };

    fn rotation(len: usize) -> RotationController {
        RotationController::new(NonZeroUsize::new(len).unwrap())
    }

    #[test]
    fn test_next_cycles_back_to_start() {
        for len in 1..=8 {
            for start in 0..len {
                let mut c = rotation(len);
                c.go_to(start).unwrap();
                for _ in 0..len {
                    c.next();
                }
                assert_eq!(c.current_index(), start, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn test_previous_inverts_next() {
        for len in 1..=8 {
            for start in 0..len {
                let mut c = rotation(len);
                c.go_to(start).unwrap();
                c.next();
                c.previous();
                assert_eq!(c.current_index(), start);

                c.previous();
                c.next();
                assert_eq!(c.current_index(), start);
            }
        }
    }

    #[test]
    fn test_go_to_ignores_prior_state() {
        let mut c = rotation(5);
        for target in 0..5 {
            c.next();
            c.pause();
            c.go_to(target).unwrap();
            assert_eq!(c.current_index(), target);
            c.resume();
        }
    }

    #[test]
    fn test_autoplay_twenty_seconds() {
        // 5 testimonials, never hovered: 4 ticks of 5000 ms
        let store = TestimonialStore::builtin();
        let mut c = store.rotation();

        let mut steps = 0;
        for _ in 0..20 {
            steps += c.advance(Duration::from_millis(1000));
        }

        assert_eq!(steps, 4);
        assert_eq!(c.current_index(), 4);
        assert_eq!(store.current(&c).unwrap().name, "Meera Reddy");
    }

    #[test]
    fn test_previous_from_start_wraps() {
        let mut c = TestimonialStore::builtin().rotation();
        c.previous();
        assert_eq!(c.current_index(), 4);
    }

    #[test]
    fn test_no_autoplay_while_hovered() {
        let mut c = rotation(5);
        c.pause();
        for _ in 0..100 {
            assert_eq!(c.advance(AUTOPLAY_INTERVAL), 0);
        }
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.mode(), PlaybackMode::Paused);
    }

    #[test]
    fn test_resume_waits_full_interval() {
        let mut c = rotation(5);
        c.advance(Duration::from_millis(4900));
        c.pause();
        c.resume();

        assert_eq!(c.advance(Duration::from_millis(4999)), 0);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.advance(Duration::from_millis(1)), 1);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_hover_cycle_scenario() {
        let mut c = rotation(5);
        c.advance(AUTOPLAY_INTERVAL * 2);
        assert_eq!(c.current_index(), 2);

        // Hover, browse manually, leave
        c.pause();
        c.next();
        c.next();
        c.advance(Duration::from_secs(30));
        assert_eq!(c.current_index(), 4);
        c.resume();

        c.advance(AUTOPLAY_INTERVAL);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_empty_demo_submission_changes_nothing() {
        let mut demo = DemoPlanner::new();
        let before = demo.clone();

        assert_eq!(demo.submit(), Err(SubmitError::EmptyInput));
        assert_eq!(demo, before);
        assert!(!demo.can_submit());
    }
}
