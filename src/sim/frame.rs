use crate::{
    config::Config,
    engine::Engine,
    platform::{Clock, Platform, PlatformError},
    renderer::Renderer,
    sim::{InputEvent, input::apply_event, movement::move_player},
    world::{Grid, Player},
};

/// Upper bound on events folded in per frame; a misbehaving queue can't
/// stall the loop.
const MAX_EVENTS_PER_FRAME: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Exiting,
}

/// Rolling render-time average, reported every `interval_ms`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameStats {
    interval_ms: u64,
    window_start: u64,
    render_ms: u64,
    frames: u64,
}

impl FrameStats {
    pub fn new(interval_ms: u64, now: u64) -> Self {
        Self {
            interval_ms,
            window_start: now,
            ..Self::default()
        }
    }

    /// Add one frame. Returns `(avg render ms, fps)` when a window closes.
    pub fn record(&mut self, now: u64, render_ms: u64) -> Option<(f64, f64)> {
        self.render_ms += render_ms;
        self.frames += 1;

        let span = now.saturating_sub(self.window_start);
        if self.interval_ms == 0 || span < self.interval_ms {
            return None;
        }
        let avg_ms = self.render_ms as f64 / self.frames as f64;
        let fps = self.frames as f64 * 1000.0 / span as f64;
        self.window_start = now;
        self.render_ms = 0;
        self.frames = 0;
        Some((avg_ms, fps))
    }
}

/// Owns the world, the player and the platform; drives one frame at a
/// time until the player asks to exit.
pub struct FrameLoop<R: Renderer, P: Platform, C: Clock> {
    engine: Engine<R>,
    grid: Grid,
    player: Player,
    platform: P,
    clock: C,
    config: Config,
    state: LoopState,
    stats: FrameStats,
    frames: u64,
}

impl<R: Renderer, P: Platform, C: Clock> FrameLoop<R, P, C> {
    pub fn new(
        renderer: R,
        grid: Grid,
        player: Player,
        platform: P,
        mut clock: C,
        config: Config,
    ) -> Self {
        let stats = FrameStats::new(config.stats_interval_ms, clock.now_millis());
        Self {
            engine: Engine::new(renderer, config.width, config.height),
            grid,
            player,
            platform,
            clock,
            config,
            state: LoopState::Running,
            stats,
            frames: 0,
        }
    }

    #[inline]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Frames completed so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run frames until exit. Returns the number of frames drawn.
    pub fn run(&mut self) -> Result<u64, PlatformError> {
        tracing::info!(
            width = self.config.width,
            height = self.config.height,
            frame_ms = self.config.min_frame_ms,
            "frame loop starting"
        );
        while self.state == LoopState::Running {
            self.frame()?;
        }
        tracing::info!(frames = self.frames, "frame loop exiting");
        Ok(self.frames)
    }

    /// One full iteration: render, input, move, pace.
    ///
    /// An exit request only takes effect once the iteration is complete.
    pub fn frame(&mut self) -> Result<LoopState, PlatformError> {
        let start = self.clock.now_millis();

        /* 1. cast + present ---------------------------------------------- */
        let platform = &mut self.platform;
        self.engine
            .render_frame(&self.grid, &self.player, |fb, w, h| platform.present(fb, w, h))?;
        let render_ms = self.clock.now_millis().saturating_sub(start);

        /* 2. drain input ------------------------------------------------- */
        for _ in 0..MAX_EVENTS_PER_FRAME {
            match self.platform.poll_input() {
                InputEvent::None => break,
                ev => apply_event(&mut self.player, ev),
            }
        }

        /* 3. move by the frame's effective length ------------------------ */
        let busy = self.clock.now_millis().saturating_sub(start);
        let elapsed = busy
            .max(self.config.min_frame_ms)
            .max(1)
            .min(self.config.max_step_ms);
        move_player(&mut self.player, &self.grid, elapsed as f64);

        /* 4. pace -------------------------------------------------------- */
        if busy < self.config.min_frame_ms {
            self.clock.sleep_millis(self.config.min_frame_ms - busy);
        }

        self.frames += 1;
        tracing::trace!(frame = self.frames, render_ms, busy, "frame done");
        if let Some((avg_ms, fps)) = self.stats.record(self.clock.now_millis(), render_ms) {
            tracing::info!("avg render: {avg_ms:.2} ms  ({fps:.1} FPS)");
        }

        if self.player.wants_exit() {
            self.state = LoopState::Exiting;
        }
        Ok(self.state)
    }
}
