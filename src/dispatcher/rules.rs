//! The portfolio rule table
//!
//! Contextual follow-ups first, then general topics. Do not reorder: several
//! keyword sets overlap ("experience" appears in both layers, "hi" occurs
//! inside many words) and the first match wins.

use super::{Rule, Topic};

/// Reply used when no rule matches
pub const FALLBACK_RESPONSE: &str = "I'm sorry, I couldn't fully understand your request. My knowledge base is focused on Tharindu's professional profile. I can help with topics like **Experience, Skills, Projects, Services, CV, Contact, Achievements, Education, Gallery, Testimonials,** or the **Skill & Experience Alignment** section. Please try rephrasing your question or selecting one of the suggestion buttons above!";

const CONTEXTUAL: &[Rule] = &[
    Rule::contextual(
        Topic::ExperienceLocation,
        &["experience"],
        &["where", "company", "who"],
        "Tharindu's most recent experience is as a **System Support Engineer at EPIC Lanka (Pvt) Ltd.**, a role he's held since June 2023. Before that, he was an IT Intern at ABC Solutions.",
    ),
    Rule::contextual(
        Topic::ProgrammingLanguages,
        &["skills"],
        &["programming", "languages"],
        "In terms of programming and scripting, Tharindu is proficient in **Shell Scripting, Python, and JavaScript.** These skills are crucial for automation and web development.",
    ),
    Rule::contextual(
        Topic::RecentProjects,
        &["projects"],
        &["latest", "recent", "newest"],
        "His most recent significant projects include the **Aqua Sync-Tech Smart Water Meter** (an IoT-based system) and his **Final Year Research Project - AgrySense360** (predictive analytics for crop yield).",
    ),
    Rule::contextual(
        Topic::ContactMethod,
        &["contact"],
        &["how", "best way"],
        "The best way to contact Tharindu is via **email at tharindulakshan@example.com** or through the <a href='#contact' onclick='window.sendSuggestedMessage(\"how can I contact Tharindu?\")'>Contact Form</a> directly on the website. He's also active on LinkedIn!",
    ),
];

const GENERAL: &[Rule] = &[
    Rule::general(
        Topic::Greeting,
        &["hello", "hi", "hey", "greetings"],
        "Hello there! How can I assist you with Tharindu's professional portfolio today? Feel free to ask about his background, projects, or how to connect. I'm here to help!",
    ),
    Rule::general(
        Topic::Experience,
        &["experience", "work history", "jobs", "past work", "employment", "career"],
        "Tharindu is currently a **Associate System Support Engineer at EPIC Lanka (Pvt) Ltd. (March 2025 - Present)**, where he focuses on critical e-Government systems, automation, and database optimization. Prior to this, he gained valuable insights as an ** Intern System Engineer at Epic Lanka (Pvt) Ltd (April 2024 – March 2025)**. You can delve deeper into his professional journey in the <a href='#experience' onclick='window.sendSuggestedMessage(\"show experience section\")'>Experience section</a> on his website.",
    ),
    Rule::general(
        Topic::Skills,
        &["skills", "expertise", "technical skills", "what are your skills", "proficient in"],
        "Tharindu's core technical expertise includes:<ul><li>**Operating Systems:** Linux (RHEL, Ubuntu), Windows Server</li><li>**DevOps Tools:** Docker, Kubernetes, Jenkins, Ansible, Git</li><li>**Cloud Platforms:** AWS, Microsoft Azure</li><li>**Databases:** MySQL, PostgreSQL, Oracle 12c</li><li>**Scripting & Programming:** Shell Scripting, Python, JavaScript</li><li>**Networking:** TCP/IP, DNS, VPN, Firewalls</li></ul>Visit the <a href='#skills' onclick='window.sendSuggestedMessage(\"show skills section\")'>Skills section</a> for a visual breakdown of his proficiency levels!",
    ),
    Rule::general(
        Topic::Projects,
        &["projects", "work examples", "show me projects", "portfolio", "what have you built"],
        "Tharindu has worked on diverse and impactful projects such as:<ul><li>NFV Demonstration with Socket Programming in C</li><li>Samba Active Directory Deployment</li><li>Oracle 12c Cloud-Based DB Setup</li><li>CI/CD Pipeline Automation for Microservices</li><li>High Availability with ProxySQL</li><li>The innovative **Aqua Sync-Tech Smart Water Meter** IoT project</li><li>His final year research: **AgrySense360** (Predictive Analytics for Yield Optimization)</li></ul>Explore the <a href='#projects' onclick='window.sendSuggestedMessage(\"show projects section\")'>Projects section</a> for more details and links to his work!",
    ),
    Rule::general(
        Topic::Contact,
        &["contact", "reach out", "how to contact", "email", "phone", "get in touch"],
        "You can easily connect with Tharindu! His email is **tlakshan@gmail.com** and his phone number is **+94 70 466 1700**. You can also find direct links to his LinkedIn, GitHub, and Twitter profiles in the <a href='#contact' onclick='window.sendSuggestedMessage(\"show contact section\")'>Contact section</a>. Feel free to send him a message directly via the contact form there!",
    ),
    Rule::general(
        Topic::Cv,
        &["cv", "resume", "download cv", "curriculum vitae", "can i get a copy of your cv"],
        "Yes, Tharindu's CV is readily available! You can view it page-by-page directly in the <a href='#cv' onclick='window.sendSuggestedMessage(\"show cv section\")'>CV section</a> by clicking on the image thumbnails. For your convenience, there's also a 'Download Full CV (PDF)' button to save a copy for your records.",
    ),
    Rule::general(
        Topic::Thanks,
        &["thank you", "thanks", "ty", "cheers"],
        "You're most welcome! I'm glad I could assist. Is there anything else you'd like to know about Tharindu or his work, or perhaps explore other sections of his portfolio?",
    ),
    Rule::general(
        Topic::Identity,
        &["name", "who are you", "your name"],
        "I am Tharindu's automated portfolio assistant, designed to help you quickly find information about his professional background and projects. I don't have a personal name or identity beyond this function.",
    ),
    Rule::general(
        Topic::Purpose,
        &["what do you do", "your purpose"],
        "My purpose is to make your visit to Tharindu's portfolio as informative and engaging as possible! I can answer questions about his experience, skills, projects, services, achievements, and how to contact him. Just ask, or use the quick suggestion buttons!",
    ),
    Rule::general(
        Topic::Education,
        &["education", "university", "qualifications", "sliit", "degree"],
        "Tharindu is a final year **Computer Systems & Network Engineering Undergraduate at SLIIT (Sri Lanka Institute of Information Technology)**. His strong academic foundation complements his practical industry experience, making him a well-rounded IT professional.",
    ),
    Rule::general(
        Topic::Hobbies,
        &["hobbies", "interests", "personal life", "outside work"],
        "While my knowledge is focused on Tharindu's professional life and technical expertise, I can tell you he is passionate about continuous learning, especially in cutting-edge technologies, automation, and collaborative tech projects! He's always eager to expand his knowledge and contribute to innovative solutions.",
    ),
    Rule::general(
        Topic::Services,
        &["services", "what can you do for me", "what do you offer", "your offerings", "hire"],
        "Tharindu offers a comprehensive range of professional services, including: <ul><li>**Cloud Infrastructure** design and deployment (AWS, Azure)</li><li>**CI/CD Automation** implementation and optimization</li><li>**System Security** hardening and best practices</li><li>**Database Management** and performance tuning</li><li>Specialized **DevOps Consulting**</li><li>Comprehensive **Monitoring & Logging** solutions</li></ul>Find more details on how he can contribute to your projects in the new <a href='#services' onclick='window.sendSuggestedMessage(\"What services do you offer?\")'>Services section</a>.",
    ),
    Rule::general(
        Topic::Achievements,
        &["achievements", "certifications", "awards", "accomplishments", "show me your achievements"],
        "Tharindu has achieved significant milestones and holds valuable certifications, including: <ul><li>An **Introduction to DevOps** certificate from Coursera</li><li>**AWS Certified Cloud Practitioner** certification</li><li>A **Certified Linux Administrator** certification from the Linux Foundation</li></ul>You can explore more about his accomplishments and verified credentials in the <a href='#achievements' onclick='window.sendSuggestedMessage(\"show achievements section\")'>Achievements & Certifications section</a> on his website.",
    ),
    Rule::general(
        Topic::Gallery,
        &["gallery", "photos", "images", "visuals"],
        "The <a href='#gallery' onclick='window.sendSuggestedMessage(\"show gallery section\")'>Gallery section</a> provides a visual journey into Tharindu's professional world. It features an auto-moving image carousel showcasing various aspects of his work environment and professional experiences. It's a great way to see him in action!",
    ),
    Rule::general(
        Topic::Testimonials,
        &["testimonials", "reviews", "feedback", "what do others say"],
        "Curious about Tharindu's professional reputation? Read what his colleagues and project managers have to say about his dedication, problem-solving abilities, and contributions in the <a href='#testimonials' onclick='window.sendSuggestedMessage(\"show testimonials section\")'>Testimonials section</a>. Their feedback speaks volumes about his work ethic!",
    ),
    Rule::general(
        Topic::Showcase,
        &["showcase", "interactive", "3d", "model", "alignment"],
        "The <a href='#interactive-showcase' onclick='window.sendSuggestedMessage(\"show interactive showcase section\")'>Skill & Experience Alignment section</a> is a dynamic area where you can see how Tharindu's core skills are applied in his professional experiences and projects. It provides a clearer picture of his practical expertise beyond just a list of abilities.",
    ),
    Rule::general(
        Topic::Website,
        &["website", "how was this built", "tech stack", "technologies used"],
        "This website is built with modern web technologies: HTML5 for structure, CSS3 for advanced styling and animations, and JavaScript for all interactive elements and dynamic content. It also integrates Firebase for authentication and analytics (view counts) and Formspree for contact form submissions. The particle effects in the hero section are powered by Three.js!",
    ),
    Rule::general(
        Topic::FinalYearProject,
        &["final year project", "agrysense360", "fyp"],
        "Tharindu's final year research project is called **AgrySense360**. It focuses on **Predictive Analytics for Yield Optimization**, aiming to forecast crop yields, optimize planting schedules, and enhance agricultural productivity. You can find a link to its details in the <a href='#projects' onclick='window.sendSuggestedMessage(\"show projects section\")'>Projects section</a>.",
    ),
    Rule::general(
        Topic::Linux,
        &["linux", "linux administration"],
        "Tharindu has extensive experience with Linux, particularly **RHEL (Red Hat Enterprise Linux) and Ubuntu**. He is a **Certified Linux Administrator** and uses Linux daily for system provisioning, automation, and managing servers. Many of his projects involve Linux as the foundational operating system.",
    ),
    Rule::general(
        Topic::DevOps,
        &["devops", "ci/cd", "automation"],
        "DevOps is one of Tharindu's key passions. He has hands-on experience with tools like **Docker, Kubernetes, Jenkins, and Ansible** to automate CI/CD pipelines, ensuring rapid and reliable software delivery. He also focuses on infrastructure automation and monitoring for production environments.",
    ),
    Rule::general(
        Topic::Cloud,
        &["cloud", "aws", "azure"],
        "Tharindu is proficient in major cloud platforms including **AWS (Amazon Web Services) and Microsoft Azure**. He has experience deploying and managing cloud solutions, setting up cloud databases, and understanding cloud infrastructure concepts. He is also **AWS Certified Cloud Practitioner**.",
    ),
    Rule::general(
        Topic::Databases,
        &["databases", "mysql", "postgresql", "oracle"],
        "Tharindu works with various databases including **MySQL, PostgreSQL, and Oracle 12c**. His expertise includes deployment, optimization, high availability setups (like Percona XtraDB Cluster and ProxySQL), and general database management for critical applications.",
    ),
    Rule::general(
        Topic::Security,
        &["security", "firewall", "system hardening"],
        "System security is a key area for Tharindu. He has experience in **hardening Linux systems, implementing firewalls, ensuring data integrity, and managing access control** to build secure IT environments.",
    ),
    Rule::general(
        Topic::Networking,
        &["networking", "tcp/ip", "dns", "vpn"],
        "Tharindu's networking skills cover core concepts like **TCP/IP, DNS, VPNs, and Firewalls**. He has experience in designing and simulating network layouts for various environments, as seen in his 'Hospital Network Simulation' project.",
    ),
];

/// The full table in priority order.
pub fn portfolio_rules() -> Vec<Rule> {
    CONTEXTUAL.iter().chain(GENERAL).copied().collect()
}
