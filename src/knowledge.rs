//! Grounding text for the remote assistant
//!
//! Every upstream conversation opens with the instruction and knowledge
//! document below as a user turn, followed by a fixed model greeting.

use std::path::Path;

/// Role and guardrails for the upstream model
pub const SYSTEM_INSTRUCTION: &str = "You are Tharindu Lakshan's AI Assistant. Provide information about Tharindu Lakshan based solely on the following knowledge base. Be concise and professional. Do not invent information. If you cannot answer a question based on this knowledge, politely state that the information is not available in Tharindu's profile. Prioritize direct answers based on this information. Respond in a helpful and professional tone.";

/// Model turn that follows the instruction
pub const MODEL_GREETING: &str = "Hello! I'm Tharindu's AI Assistant. How can I help you today? You can ask me about his skills, experience, projects, or how to contact him.";

/// Built-in profile document
pub const DEFAULT_KNOWLEDGE: &str = r"
Tharindu Lakshan is a System Support Engineer and a Computer Systems & Network Engineering Undergraduate from SLIIT.
His key professional experience includes:
- System Support Engineer at Epic Lanka Pvt Ltd (Apr 2024 – Present): Contributes to maintaining and enhancing production environments, working on mission-critical systems, managing Linux/Windows servers, containerizing applications with Docker, maintaining MySQL/PostgreSQL/MongoDB databases, automating monitoring, and resolving real-time issues.
- DevOps Intern at TechWave Innovations (Jan 2024 – Mar 2024): Contributed to DevOps pipeline automation, server configuration, built CI/CD pipelines (Jenkins, GitHub Actions), deployed VPS server for Java REST/Flutter Web apps, assisted Docker workflows.

Tharindu's key skills include:
- Cloud Platforms: AWS, Azure, OCI
- DevOps Tools: Docker, Jenkins, Ansible, Git
- Operating Systems: Linux (Ubuntu, CentOS, RHEL), Windows Server
- Monitoring: Grafana, Prometheus, Netdata
- Databases: MySQL, PostgreSQL, MongoDB, Oracle, Percona Extradb Cluster
- Security & Networking: Samba AD, ProxySQL, Load Balancing, HAProxy
- Programming & Scripting: Bash, Python, SQL, C

Tharindu's notable projects include:
- NFV Demonstration with Socket Programming in C
- Samba Active Directory Deployment
- Oracle 12c Cloud-Based DB Setup
- Monitoring of Microservices, Application Servers, and Databases
- Multi-Tier Environment for DOXMATE
- DevOps CI/CD Pipeline Automation
- Mission-Critical Gov System Support
- High Availability with ProxySQL
- CI/CD for Microservices
- Aqua Sync-Tech Smart Water Meter Billing and Monitoring with Mobile Application
- Final Year Research Project - AgrySense360

You can contact Tharindu Lakshan via:
- Email: tharindulakshan.dev@gmail.com
- Phone: +94 71 889 0601
- Location: Galle, Sri Lanka
- GitHub: https://github.com/Tharindu-Lakshan-manathunga
- LinkedIn: https://linkedin.com/in/tharindulakshanmanathunga
- Medium: https://medium.com/@tharindulakshan.dev

If a user asks about anything not covered here, state that the information is not available in Tharindu's profile. Prioritize direct answers based on this information. Respond in a helpful and professional tone.
";

/// Instruction and knowledge document the upstream conversation opens with
#[derive(Debug, Clone)]
pub struct Knowledge {
    document: String,
}

impl Default for Knowledge {
    fn default() -> Self {
        Self::new(DEFAULT_KNOWLEDGE)
    }
}

impl Knowledge {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }

    /// Load the document from a file, or use the built-in one.
    pub fn load(path: Option<&Path>) -> std::io::Result<Self> {
        match path {
            Some(path) => {
                let document = std::fs::read_to_string(path)?;
                tracing::info!(
                    path = %path.display(),
                    bytes = document.len(),
                    "Loaded knowledge document"
                );
                Ok(Self::new(document))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    /// Text of the opening user turn.
    pub fn preamble(&self) -> String {
        format!("{SYSTEM_INSTRUCTION}\n{}", self.document)
    }
}
