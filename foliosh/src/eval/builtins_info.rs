use chrono::{DateTime, Local, TimeZone};
use rand::Rng;
use std::fmt;

use crate::error::CommandResult;
use crate::help;
use crate::output::{KeyValueBlock, Output};
use crate::terminal::{Identity, Terminal};

/// Drawn to the left of the `neofetch` block.
pub const LOGO: &str = r"   _____         __  __
  / ____|       / _|/ _|
 | (___   ___ | |_| |_
  \___ \ / _ \|  _|  _|
  ____) | (_) | | | |
 |_____/ \___/|_| |_|";

const ABOUT: &str = "Hi, I'm Rishmika Sandanu!
I'm a passionate full-stack developer with 5+ years of experience.
I specialize in React, Next.js, TypeScript, and Node.js.
When not coding, I enjoy hiking, reading sci-fi, and cooking.

Tip: Try cat about.txt for the same information.";

/// The three `neofetch` values that change on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeofetchStats {
    pub uptime_days: u32,
    pub packages: u32,
    pub memory_gb: u32,
}

impl NeofetchStats {
    #[must_use]
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            uptime_days: rng.gen_range(0..100),
            packages: rng.gen_range(0..1000),
            memory_gb: rng.gen_range(0..16),
        }
    }
}

#[must_use]
pub fn neofetch_block(identity: &Identity, stats: &NeofetchStats) -> KeyValueBlock {
    KeyValueBlock::new()
        .logo(LOGO)
        .pair("OS", identity.os.as_str())
        .pair("Host", "Vercel Cloud")
        .pair("Kernel", "Next.js 14.0.0")
        .pair("Uptime", format!("{} days", stats.uptime_days))
        .pair("Packages", format!("npm ({})", stats.packages))
        .pair("Shell", "portfolio-sh v1.0.0")
        .pair("Resolution", "Responsive x Adaptive")
        .pair("DE", "React 18")
        .pair("WM", "Tailwind CSS")
        .pair("Terminal", "portfolio-term")
        .pair("CPU", "TypeScript @ 5.0GHz")
        .pair("Memory", format!("{}GB / 16GB", stats.memory_gb))
}

/// `Mon Oct 19 2026 14:03:07 GMT+0000`
pub fn format_date<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    now.format("%a %b %d %Y %H:%M:%S GMT%z").to_string()
}

fn skills_block() -> KeyValueBlock {
    KeyValueBlock::new()
        .title("Technical Skills:")
        .pair("Frontend", "React, Next.js, TypeScript, Tailwind CSS")
        .pair("Backend", "Node.js, Express, NestJS, GraphQL")
        .pair("Database", "MongoDB, PostgreSQL, Redis")
        .pair("DevOps", "Docker, AWS, Vercel, CI/CD")
        .footer("Tip: Try cat skills.txt for the same information.")
}

fn projects_block() -> KeyValueBlock {
    KeyValueBlock::new()
        .title("Recent Projects:")
        .separator(" - ")
        .pair("E-Commerce Platform", "Next.js, TypeScript, Stripe")
        .pair("Task Management App", "React, Firebase, Styled Components")
        .pair("Portfolio Website", "Next.js, Framer Motion, Tailwind CSS")
        .pair("Weather Dashboard", "React, OpenWeather API, Mapbox")
        .footer("Tip: Try cd projects and then ls to explore project files.")
}

fn contact_block() -> KeyValueBlock {
    KeyValueBlock::new()
        .pair("Email", "rishmika@example.com")
        .pair("GitHub", "github.com/rishmika")
        .pair("LinkedIn", "linkedin.com/in/rishmika")
        .pair("Twitter", "@rishmika")
        .footer(
            "Feel free to reach out for collaborations or opportunities!\n\
             Tip: Try cat contact.txt for the same information.",
        )
}

impl Terminal {
    pub(crate) fn try_execute_info_builtin(
        &self,
        name: &str,
        args: &[&str],
    ) -> Option<CommandResult<Output>> {
        match name {
            "help" | "about" | "skills" | "projects" | "contact" | "date" | "whoami" | "echo"
            | "uname" | "neofetch" => Some(Ok(self.dispatch_info_builtin(name, args))),
            _ => None,
        }
    }

    fn dispatch_info_builtin(&self, name: &str, args: &[&str]) -> Output {
        match name {
            "help" => Output::KeyValue(help::help_block()),
            "about" => Output::text(ABOUT),
            "skills" => Output::KeyValue(skills_block()),
            "projects" => Output::KeyValue(projects_block()),
            "contact" => Output::KeyValue(contact_block()),
            "date" => Output::Text(format_date(&Local::now())),
            "whoami" => Output::text(self.identity.user.as_str()),
            "uname" => Output::text(self.identity.os.as_str()),
            "echo" => Output::Text(args.join(" ")),
            "neofetch" => {
                let stats = NeofetchStats::random();
                tracing::trace!(?stats, "neofetch");
                Output::KeyValue(neofetch_block(&self.identity, &stats))
            }
            _ => unreachable!(),
        }
    }
}
