//! Frame loop glue between a host's event stream and the simulation.

use std::ops::ControlFlow;

use crate::Simulation;

/// Input a host forwards once per frame.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum HostEvent {
    PointerDown,
    PointerUp,
    PointerMoved { x: f32, y: f32 },
    /// Wheel notches; positive is away from the user.
    Wheel(i32),
    /// Current value of the cell-size slider, sent every frame or on change.
    CellSizeSlider(u32),
    /// Host wants the loop to end.
    Quit,
}

/// Per-frame order: drain events, paint under a held pointer, tick once.
#[derive(Debug, Default, Clone)]
pub struct FrameDriver {
    pointer_down: bool,
    pointer: Option<(f32, f32)>,
}

impl FrameDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pointer_down(&self) -> bool {
        self.pointer_down
    }

    #[must_use]
    pub fn pointer(&self) -> Option<(f32, f32)> {
        self.pointer
    }

    /// Runs one frame. Returns `Break` as soon as a `Quit` event is seen;
    /// the rest of that frame is skipped.
    pub fn frame<I>(&mut self, sim: &mut Simulation, events: I) -> ControlFlow<()>
    where
        I: IntoIterator<Item = HostEvent>,
    {
        for event in events {
            match event {
                HostEvent::Quit => return ControlFlow::Break(()),
                HostEvent::PointerDown => self.pointer_down = true,
                HostEvent::PointerUp => self.pointer_down = false,
                HostEvent::PointerMoved { x, y } => self.pointer = Some((x, y)),
                HostEvent::Wheel(notches) => sim.adjust_brush(notches),
                HostEvent::CellSizeSlider(size) => {
                    sim.set_cell_size(size);
                }
            }
        }

        if self.pointer_down {
            if let Some((x, y)) = self.pointer {
                sim.paint(x, y);
            }
        }
        sim.tick();
        ControlFlow::Continue(())
    }
}
