//! The fixed tree shipped with the terminal.

use crate::vfs::{Filesystem, FsNode};

pub const ABOUT: &str = "Hi, I'm Rishmika Sandanu!\n\
I'm a passionate full-stack developer with 5+ years of experience.\n\
I specialize in React, Next.js, TypeScript, and Node.js.\n\
When not coding, I enjoy hiking, reading sci-fi, and cooking.";

pub const SKILLS: &str = "Technical Skills:\n\
- Frontend: React, Next.js, TypeScript, Tailwind CSS\n\
- Backend: Node.js, Express, NestJS, GraphQL\n\
- Database: MongoDB, PostgreSQL, Redis\n\
- DevOps: Docker, AWS, Vercel, CI/CD";

pub const CONTACT: &str = "Email: rishmika@example.com\n\
GitHub: github.com/rishmika\n\
LinkedIn: linkedin.com/in/rishmika\n\
Twitter: @rishmika\n\
\n\
Feel free to reach out for collaborations or opportunities!";

pub const ECOMMERCE: &str = "E-Commerce Platform\n\
\n\
A full-featured online store with cart, checkout, and payment integration.\n\
\n\
Technologies: Next.js, TypeScript, Tailwind CSS, Stripe\n\
URL: https://project1.example.com";

pub const TASK_MANAGER: &str = "Task Management App\n\
\n\
A Kanban-style task manager with drag-and-drop functionality and real-time updates.\n\
\n\
Technologies: React, Firebase, Styled Components\n\
URL: https://project2.example.com";

pub const PORTFOLIO: &str = "Portfolio Website\n\
\n\
A modern, responsive portfolio website with dark mode and animations.\n\
\n\
Technologies: Next.js, Framer Motion, Tailwind CSS\n\
URL: https://project3.example.com";

pub const EDUCATION: &str = "Education:\n\
\n\
2013-2017: Bachelor of Science in Computer Science, University of Technology\n\
2020: Advanced React & GraphQL, Online Certification\n\
2022: AWS Certified Developer, Amazon Web Services";

pub const EXPERIENCE: &str = "Work Experience:\n\
\n\
2021-Present: Senior Frontend Developer, Tech Innovators Inc.\n\
2019-2021: Full-Stack Developer, Digital Solutions LLC\n\
2017-2019: Web Developer, Creative Agency";

impl Filesystem {
    /// Three top-level files plus the `projects` and `resume` directories.
    #[must_use]
    pub fn portfolio() -> Self {
        Self::new([
            FsNode::file("about.txt", ABOUT),
            FsNode::file("skills.txt", SKILLS),
            FsNode::file("contact.txt", CONTACT),
            FsNode::dir(
                "projects",
                [
                    FsNode::file("ecommerce.txt", ECOMMERCE),
                    FsNode::file("taskmanager.txt", TASK_MANAGER),
                    FsNode::file("portfolio.txt", PORTFOLIO),
                ],
            ),
            FsNode::dir(
                "resume",
                [
                    FsNode::file("education.txt", EDUCATION),
                    FsNode::file("experience.txt", EXPERIENCE),
                ],
            ),
        ])
    }
}
