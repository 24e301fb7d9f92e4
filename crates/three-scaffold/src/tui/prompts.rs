//! The interactive create flow

use crate::install::Installer;
use crate::runtime;
use crate::validate;
use crate::workflow::{self, ProjectRequest};
use anyhow::Result;

/// Run the interactive flow: two questions, then the workflow.
pub async fn run(verbose: bool) -> Result<()> {
    cliclack::intro("three-tools")?;

    // Advisory probe: a missing npm is reported but never blocks the flow.
    let npm = runtime::check_npm();
    if npm.available {
        cliclack::log::success(format!(
            "npm installed ({})",
            npm.version.as_deref().unwrap_or("unknown")
        ))?;
    } else {
        cliclack::log::warning("npm not found on PATH; installs will fail until it is available")?;
    }

    let base = std::env::current_dir()?;

    // Question 1: project name, re-asked inline until it validates.
    let validator_base = base.clone();
    let name: String = cliclack::input("What do you want to call the project?")
        .validate(move |input: &String| {
            validate::check_project_name(&validator_base, input).map_err(|e| e.to_string())
        })
        .interact()?;

    // Question 2: variant choice.
    let typescript = cliclack::confirm("Do you want to use typescript?")
        .initial_value(false)
        .interact()?;

    let request = ProjectRequest {
        name,
        typescript,
        verbose,
    };

    workflow::run(&request, &base, &Installer::npm()).await?;

    print_next_steps(&request.name);

    cliclack::outro("Finished!")?;

    Ok(())
}

fn print_next_steps(name: &str) {
    println!();
    println!("  Next steps");
    println!();
    println!("  1.  cd {}", name);
    println!("  2.  npm run start");
}
