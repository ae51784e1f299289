//! Pure transforms over parsed paths. Every function returns a fresh [`Path`].

use crate::command::{ArgRole, Command, CommandKind, Path};
use crate::error::Result;
use crate::geom::compute_bounding_box;

/// Shifts x coordinates so the bounding box starts at `x = 0`, rounding every translated x to
/// an integer (half away from zero). Y coordinates pass through unchanged.
pub fn translate_x_to_origin(path: &Path) -> Result<Path> {
    let bbox = compute_bounding_box(path)?;
    let dx = -bbox.min_x;
    tracing::debug!(dx, "translate x to origin");
    path.map_args(|role, v| match role {
        ArgRole::X => (v + dx).round(),
        _ => v,
    })
    .ensure_finite()
}

/// Shifts both axes so the bounding box starts at `(0, 0)`, rounding every translated
/// coordinate to an integer (half away from zero).
pub fn translate_to_origin(path: &Path) -> Result<Path> {
    let bbox = compute_bounding_box(path)?;
    let (dx, dy) = (-bbox.min_x, -bbox.min_y);
    tracing::debug!(dx, dy, "translate to origin");
    path.map_args(|role, v| match role {
        ArgRole::X => (v + dx).round(),
        ArgRole::Y => (v + dy).round(),
        _ => v,
    })
    .ensure_finite()
}

/// Resolves relative commands against the current point, yielding only uppercase commands.
///
/// Close-path returns the current point to the start of the subpath. Fails with
/// [`crate::Error::NonFinite`] when accumulating offsets overflows.
pub fn to_absolute(path: &Path) -> Result<Path> {
    let mut current = (0.0f64, 0.0f64);
    let mut subpath_start = (0.0f64, 0.0f64);

    let resolved: Path = path
        .commands()
        .iter()
        .map(|cmd| {
            if cmd.is_close() {
                current = subpath_start;
                return Command::new(cmd.kind, false, Vec::new());
            }

            let arity = cmd.kind.arity();
            let mut args = Vec::with_capacity(cmd.args.len());
            for (rep, chunk) in cmd.args.chunks(arity).enumerate() {
                let base = current;
                let mut end = current;
                for (offset, &v) in chunk.iter().enumerate() {
                    let abs = match cmd.kind.role(rep * arity + offset) {
                        Some(ArgRole::X) => {
                            let x = if cmd.relative { v + base.0 } else { v };
                            end.0 = x;
                            x
                        }
                        Some(ArgRole::Y) => {
                            let y = if cmd.relative { v + base.1 } else { v };
                            end.1 = y;
                            y
                        }
                        _ => v,
                    };
                    args.push(abs);
                }
                current = end;
                if cmd.kind == CommandKind::MoveTo && rep == 0 {
                    subpath_start = end;
                }
            }
            Command::new(cmd.kind, false, args)
        })
        .collect();
    resolved.ensure_finite()
}
