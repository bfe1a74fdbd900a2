mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_effect_light::attribute::AttributeChange;
    use myrtio_effect_light::command::{CommandChannel, LightCommand, send_command};
    use myrtio_effect_light::config::LightConfig;
    use myrtio_effect_light::controller::Controller;
    use myrtio_effect_light::effect::EffectId;
    use myrtio_effect_light::engine::EngineState;
    use myrtio_effect_light::frame_scheduler::FrameScheduler;
    use myrtio_effect_light::{OutputSink, Rgb};

    const LEDS: usize = 4;

    struct NullSink;

    impl OutputSink for NullSink {
        type Error = ();

        fn set_pixel(&mut self, _index: usize, _color: Rgb) {}

        fn commit(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn scheduler(
        channel: &CommandChannel<2>,
        effect: EffectId,
    ) -> FrameScheduler<'_, NullSink, (), LEDS, 2> {
        let mut controller = Controller::new(channel.receiver(), NullSink, (), LightConfig::default());
        controller
            .apply_attribute(AttributeChange::Effect(effect))
            .expect("accepted");
        FrameScheduler::new(controller)
    }

    #[test]
    fn test_idle_has_no_deadline() {
        let channel = CommandChannel::<2>::new();
        let mut scheduler = scheduler(&channel, EffectId::None);
        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, None);
        assert_eq!(result.sleep_duration, None);
    }

    #[test]
    fn test_deadlines_follow_interval() {
        let channel = CommandChannel::<2>::new();
        let mut scheduler = scheduler(&channel, EffectId::Rainbow);

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Some(Instant::from_millis(163)));
        assert_eq!(result.sleep_duration, Some(Duration::from_millis(163)));

        // Slightly late: keep the cadence
        let result = scheduler.tick(Instant::from_millis(170));
        assert_eq!(result.next_deadline, Some(Instant::from_millis(326)));
        assert_eq!(result.sleep_duration, Some(Duration::from_millis(156)));
    }

    #[test]
    fn test_large_drift_resets_schedule() {
        let channel = CommandChannel::<2>::new();
        let mut scheduler = scheduler(&channel, EffectId::Rainbow);

        scheduler.tick(Instant::from_millis(0));
        let result = scheduler.tick(Instant::from_millis(2000));
        assert_eq!(result.next_deadline, Some(Instant::from_millis(2163)));
        assert_eq!(result.sleep_duration, Some(Duration::from_millis(163)));
    }

    #[test]
    fn test_stopping_effect_clears_deadline() {
        let channel = CommandChannel::<2>::new();
        let mut scheduler = scheduler(&channel, EffectId::Scan);
        assert!(scheduler.tick(Instant::from_millis(0)).next_deadline.is_some());

        scheduler
            .controller_mut()
            .apply_attribute(AttributeChange::Power(false))
            .expect("accepted");
        assert_eq!(scheduler.tick(Instant::from_millis(10)).next_deadline, None);
        assert!(!scheduler.controller().state().power);
    }

    #[test]
    fn test_queued_identify_keeps_blink_cadence() {
        let channel = CommandChannel::<2>::new();
        let sender = channel.sender();
        let mut scheduler = scheduler(&channel, EffectId::Twinkle);

        let mut now = Instant::from_millis(0);
        let result = scheduler.tick(now);
        now = result.next_deadline.expect("rendering");

        send_command(&sender, LightCommand::Identify(2)).expect("queued");
        for _ in 0..8 {
            let result = scheduler.tick(now);
            assert!(scheduler.controller().is_identifying());
            assert_eq!(result.sleep_duration, Some(Duration::from_millis(250)));
            now = result.next_deadline.expect("blinking");
        }

        let result = scheduler.tick(now);
        assert!(!scheduler.controller().is_identifying());
        assert_eq!(result.sleep_duration, Some(Duration::from_millis(163)));
        assert_eq!(
            scheduler.controller().engine_state(),
            EngineState::Rendering(EffectId::Twinkle)
        );
    }
}
