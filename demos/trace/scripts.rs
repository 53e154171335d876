use vecproj::math::Point2;
use vecproj::scene::{PointerChannel, PointerEvent, PointerPhase, ShapeController, ShapeMode};
use vecproj::Result;

/// All available script names.
pub const SCRIPTS: &[&str] = &["rectangle", "polygon", "sweep"];

/// One scripted input between two ticks.
pub enum Step {
    Pointer(PointerEvent),
    Sides(u32),
    Mode(ShapeMode),
    Idle,
}

impl Step {
    pub fn apply(&self, controller: &mut ShapeController) -> Result<()> {
        match self {
            Self::Pointer(event) => controller.handle_pointer(*event),
            Self::Sides(n) => controller.set_sides(*n).map(|_| ()),
            Self::Mode(mode) => {
                controller.set_mode(*mode);
                Ok(())
            }
            Self::Idle => Ok(()),
        }
    }
}

fn pointer(channel: PointerChannel, phase: PointerPhase, x: f64, y: f64) -> Step {
    Step::Pointer(PointerEvent::new(channel, phase, Point2::new(x, y)))
}

/// Returns the steps of the named script.
pub fn lookup(name: &str) -> Option<Vec<Step>> {
    use PointerChannel::{Primary, Secondary};
    use PointerPhase::{Drag, Press};

    match name {
        "rectangle" => Some(vec![
            Step::Mode(ShapeMode::Rectangle),
            pointer(Primary, Press, 300.0, 100.0),
            pointer(Primary, Drag, 350.0, 150.0),
            pointer(Primary, Drag, 400.0, 200.0),
            Step::Idle,
        ]),
        "polygon" => Some(vec![
            Step::Sides(6),
            Step::Idle,
            pointer(Primary, Press, 150.0, 350.0),
            pointer(Primary, Drag, 150.0, 420.0),
            pointer(Primary, Drag, 200.0, 400.0),
            Step::Sides(3),
            Step::Sides(99),
        ]),
        "sweep" => {
            let mut steps = vec![pointer(Secondary, Press, 250.0, 250.0)];
            steps.extend((0..12).map(|i| {
                let a = f64::from(i) * std::f64::consts::PI / 6.0;
                pointer(Secondary, Drag, 250.0 + a.sin() * 100.0, 250.0 + a.cos() * 100.0)
            }));
            Some(steps)
        }
        _ => None,
    }
}
