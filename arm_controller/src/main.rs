use eyre::Result;
use planar_arm_lib::{
    init_tracing, ArmCommand, ArmConfig, ArmState, CartesianPoint, CommandMetadata,
    TrajectoryMessage,
};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

struct ArmController {
    state: ArmState,
}

impl ArmController {
    fn new() -> Result<Self> {
        let config_path =
            std::env::var("ARM_CONFIG").unwrap_or_else(|_| "config/arm_2dof.toml".to_string());

        let config = ArmConfig::load_from_file(&config_path)
            .map_err(|e| eyre::eyre!("Failed to load arm config from {}: {}", config_path, e))?;
        config.validate()?;

        info!(
            "Loaded {} configuration: l1={} m, l2={} m, home=({}, {})",
            config.name, config.links.l1, config.links.l2, config.home[0], config.home[1]
        );

        let state = ArmState::new(&config)?;

        Ok(Self { state })
    }

    /// Map one input line to a command. Returns `Ok(None)` for empty lines
    /// and commands that need no arm motion.
    fn parse_line(&self, line: &str) -> Result<Option<ArmCommand>> {
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            None => Ok(None),
            Some("move") => {
                let x = tokens
                    .next()
                    .ok_or_else(|| eyre::eyre!("Usage: move <x> <y>"))?
                    .parse::<f64>()
                    .map_err(|_| eyre::eyre!("Invalid x coordinate"))?;
                let y = tokens
                    .next()
                    .ok_or_else(|| eyre::eyre!("Usage: move <x> <y>"))?
                    .parse::<f64>()
                    .map_err(|_| eyre::eyre!("Invalid y coordinate"))?;
                Ok(Some(ArmCommand::CartesianMove { x, y }))
            }
            Some("home") => Ok(Some(ArmCommand::Home)),
            Some("status") => {
                self.print_status();
                Ok(None)
            }
            Some(other) => Err(eyre::eyre!(
                "Unknown command '{}' (expected move/home/status/quit)",
                other
            )),
        }
    }

    fn execute_command(&mut self, command: ArmCommand) -> Result<()> {
        let result = match command {
            ArmCommand::CartesianMove { x, y } => self.state.move_to(&CartesianPoint::new(x, y)),
            ArmCommand::Home => self.state.home(),
        };

        match result {
            Ok(trajectory) => {
                info!(
                    "Move accepted: {} samples over {} s, TCP now at ({:.4}, {:.4})",
                    trajectory.len(),
                    trajectory.duration_s,
                    self.state.current_position().x,
                    self.state.current_position().y
                );

                // Hand the full trajectory to plotting/rendering collaborators
                let message = TrajectoryMessage {
                    trajectory,
                    metadata: CommandMetadata::new(),
                };
                let mut stdout = io::stdout().lock();
                serde_json::to_writer(&mut stdout, &message)?;
                stdout.write_all(b"\n")?;
            }
            Err(e) => {
                // Rejected moves are user-facing warnings, not fatal
                warn!("Move rejected: {}", e);
            }
        }

        Ok(())
    }

    fn print_status(&self) {
        let angles = self.state.current_angles();
        let position = self.state.current_position();
        info!(
            "TCP: ({:.3}, {:.3}), q1: {:.1} deg, q2: {:.1} deg",
            position.x,
            position.y,
            angles.q1.to_degrees(),
            angles.q2.to_degrees()
        );
    }
}

fn main() -> Result<()> {
    let _guard = init_tracing();

    let mut controller = ArmController::new()?;
    controller.print_status();
    info!("Arm controller ready - commands: move <x> <y>, home, status, quit");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed == "quit" || trimmed == "exit" {
            break;
        }

        match controller.parse_line(trimmed) {
            Ok(Some(command)) => controller.execute_command(command)?,
            Ok(None) => {}
            Err(e) => warn!("{}", e),
        }
    }

    info!("Arm controller finished");
    Ok(())
}
