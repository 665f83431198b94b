//! Built-in session primer templates
//!
//! These are compiled into the binary; the catalog is populated from them at
//! construction. Bodies use `{{KEY}}` markers, one descriptor per key.

use super::descriptor::PlaceholderDescriptor;
use super::template::{Template, TemplateCategory};

const POWERSHELL_ADMIN_BODY: &str = r#"Hi! I'm a Windows System Administrator working on PowerShell automation scripts using PowerShell {{PS_VERSION}} and {{AZURE_MODULES}}.

My current context:
- Project: {{PROJECT_NAME}} - {{PROJECT_DESCRIPTION}}
- Primary languages: PowerShell, {{OTHER_LANGUAGES}}
- Key frameworks/tools: {{FRAMEWORKS}}
- Current focus: {{CURRENT_FOCUS}}

My preferences:
- Communication style: {{COMMUNICATION_STYLE}}
- Code style: {{CODE_STYLE}}
- Expertise level: {{EXPERTISE_LEVEL}} in PowerShell scripting, {{AZURE_EXPERTISE}} in Azure services

Session goals:
- {{SESSION_GOALS}}

Previous context to remember:
- {{PREVIOUS_CONTEXT}}

Please help me with questions about this project, keeping my preferences and context in mind.

Today's specific question: "#;

const PYTHON_DEVELOPER_BODY: &str = r#"Hi! I'm a Backend Developer working on a Python {{APP_TYPE}} using {{FRAMEWORK}} and {{DATABASE}}.

My current context:
- Project: {{PROJECT_NAME}} - {{PROJECT_DESCRIPTION}}
- Primary languages: Python {{PYTHON_VERSION}}, {{OTHER_LANGUAGES}}
- Key frameworks/tools: {{FRAMEWORKS}}
- Current focus: {{CURRENT_FOCUS}}

My preferences:
- Communication style: {{COMMUNICATION_STYLE}}
- Code style: {{CODE_STYLE}}
- Expertise level: {{PYTHON_EXPERTISE}} in Python, {{OTHER_EXPERTISE}}

Session goals:
- {{SESSION_GOALS}}

Previous context to remember:
- {{PREVIOUS_CONTEXT}}

Please help me with questions about this project, keeping my preferences and context in mind.

Today's specific question: "#;

const CSHARP_DEVELOPER_BODY: &str = r#"Hi! I'm a .NET Developer working on a C# {{APP_TYPE}} using {{FRAMEWORK}} and {{DATABASE}}.

My current context:
- Project: {{PROJECT_NAME}} - {{PROJECT_DESCRIPTION}}
- Primary languages: C# {{DOTNET_VERSION}}, {{OTHER_LANGUAGES}}
- Key frameworks/tools: {{FRAMEWORKS}}
- Current focus: {{CURRENT_FOCUS}}

My preferences:
- Communication style: {{COMMUNICATION_STYLE}}
- Code style: {{CODE_STYLE}}
- Expertise level: {{CSHARP_EXPERTISE}} in C#/.NET, {{OTHER_EXPERTISE}}

Session goals:
- {{SESSION_GOALS}}

Previous context to remember:
- {{PREVIOUS_CONTEXT}}

Please help me with questions about this project, keeping my preferences and context in mind.

Today's specific question: "#;

const JAVASCRIPT_DEVELOPER_BODY: &str = r#"Hi! I'm a {{ROLE_TYPE}} Developer working on a JavaScript {{APP_TYPE}} using {{FRAMEWORK}} and {{BACKEND}}.

My current context:
- Project: {{PROJECT_NAME}} - {{PROJECT_DESCRIPTION}}
- Primary languages: JavaScript/TypeScript, {{OTHER_LANGUAGES}}
- Key frameworks/tools: {{FRAMEWORKS}}
- Current focus: {{CURRENT_FOCUS}}

My preferences:
- Communication style: {{COMMUNICATION_STYLE}}
- Code style: {{CODE_STYLE}}
- Expertise level: {{JS_EXPERTISE}} in JavaScript/TypeScript, {{OTHER_EXPERTISE}}

Session goals:
- {{SESSION_GOALS}}

Previous context to remember:
- {{PREVIOUS_CONTEXT}}

Please help me with questions about this project, keeping my preferences and context in mind.

Today's specific question: "#;

const CUSTOM_TEMPLATE_BODY: &str = "{{CUSTOM_PROMPT}}";

const CUSTOM_PROMPT_DEFAULT: &str = r#"Hi! I'm a [YOUR_ROLE] working on [PROJECT_TYPE] using [TECH_STACK].

My current context:
- Project: [PROJECT_NAME] - [DESCRIPTION]
- Primary languages: [LANGUAGES]
- Key frameworks/tools: [FRAMEWORKS]
- Current focus: [CURRENT_FOCUS]

My preferences:
- Communication style: [STYLE]
- Code style: [PREFERENCES]
- Expertise level: [LEVEL]

Session goals:
- [GOALS]

Previous context to remember:
- [CONTEXT]

Please help me with questions about this project, keeping my preferences and context in mind.

Today's specific question: "#;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Communication style options shared by the role templates
fn communication_style(default: &str) -> PlaceholderDescriptor {
    PlaceholderDescriptor::select(
        "COMMUNICATION_STYLE",
        "Communication Style",
        "How you prefer AI responses",
        strings(&[
            "Detailed explanations with examples",
            "Concise with code examples",
            "Educational step-by-step",
        ]),
    )
    .with_default(default)
}

fn session_goals(default: &str) -> PlaceholderDescriptor {
    PlaceholderDescriptor::multiline("SESSION_GOALS", "Session Goals", "What you want to accomplish today")
        .with_default(default)
}

fn previous_context(default: &str) -> PlaceholderDescriptor {
    PlaceholderDescriptor::multiline(
        "PREVIOUS_CONTEXT",
        "Previous Context",
        "Important context from previous sessions",
    )
    .with_default(default)
}

fn powershell_admin() -> Template {
    Template::new(
        "powershell-admin",
        "PowerShell Administrator",
        "For Windows system administrators working with PowerShell automation",
        Some(TemplateCategory::Admin),
        POWERSHELL_ADMIN_BODY,
        vec![
            PlaceholderDescriptor::text("PS_VERSION", "PowerShell Version", "e.g., PowerShell 7.4")
                .with_default("PowerShell 7.4"),
            PlaceholderDescriptor::text("AZURE_MODULES", "Azure Modules", "e.g., Azure modules, Microsoft Graph API")
                .with_default("Azure modules"),
            PlaceholderDescriptor::text("PROJECT_NAME", "Project Name", "Current project name")
                .with_default("Enterprise automation"),
            PlaceholderDescriptor::text("PROJECT_DESCRIPTION", "Project Description", "Brief project description")
                .with_default("automating user provisioning and system management"),
            PlaceholderDescriptor::text("OTHER_LANGUAGES", "Other Languages", "Additional languages you use")
                .with_default("some Python for data processing"),
            PlaceholderDescriptor::text("FRAMEWORKS", "Key Frameworks/Tools", "Main tools and frameworks")
                .with_default("Azure PowerShell, Active Directory, Group Policy"),
            PlaceholderDescriptor::text("CURRENT_FOCUS", "Current Focus", "What you're working on now")
                .with_default("Error handling and logging improvements"),
            communication_style("Detailed explanations with examples"),
            PlaceholderDescriptor::text("CODE_STYLE", "Code Style Preferences", "Your coding preferences")
                .with_default("Explicit error handling, verbose parameter names, comment-heavy"),
            PlaceholderDescriptor::select(
                "EXPERTISE_LEVEL",
                "PowerShell Expertise",
                "Your PowerShell skill level",
                strings(&["Beginner", "Intermediate", "Expert"]),
            )
            .with_default("Expert"),
            PlaceholderDescriptor::select(
                "AZURE_EXPERTISE",
                "Azure Expertise",
                "Your Azure skill level",
                strings(&["Beginner", "Intermediate", "Expert"]),
            )
            .with_default("Intermediate"),
            session_goals(
                "Improve error handling patterns in automation scripts\nLearn best practices for resilient automation",
            ),
            previous_context(
                "Working on modular script design with proper logging\nEmphasis on enterprise-grade reliability",
            ),
        ],
    )
}

fn python_developer() -> Template {
    Template::new(
        "python-developer",
        "Python Developer",
        "For backend developers working with Python applications",
        Some(TemplateCategory::Developer),
        PYTHON_DEVELOPER_BODY,
        vec![
            PlaceholderDescriptor::select(
                "APP_TYPE",
                "Application Type",
                "Type of application",
                strings(&[
                    "web service",
                    "data processing service",
                    "API backend",
                    "microservice",
                    "desktop application",
                ]),
            )
            .with_default("web service"),
            PlaceholderDescriptor::select(
                "FRAMEWORK",
                "Primary Framework",
                "Main Python framework",
                strings(&["FastAPI", "Django", "Flask", "Streamlit", "Jupyter"]),
            )
            .with_default("FastAPI"),
            PlaceholderDescriptor::select(
                "DATABASE",
                "Database",
                "Database technology",
                strings(&["PostgreSQL", "MySQL", "SQLite", "MongoDB", "Redis"]),
            )
            .with_default("PostgreSQL"),
            PlaceholderDescriptor::text("PROJECT_NAME", "Project Name", "Current project name")
                .with_default("Customer analytics pipeline"),
            PlaceholderDescriptor::text("PROJECT_DESCRIPTION", "Project Description", "Brief project description")
                .with_default("processing e-commerce transaction data"),
            PlaceholderDescriptor::text("PYTHON_VERSION", "Python Version", "Python version you're using")
                .with_default("3.11"),
            PlaceholderDescriptor::text("OTHER_LANGUAGES", "Other Languages", "Additional languages you use")
                .with_default("SQL, some JavaScript for dashboards"),
            PlaceholderDescriptor::text("FRAMEWORKS", "Key Frameworks/Tools", "Main tools and frameworks")
                .with_default("FastAPI, SQLAlchemy, Pandas, Docker, Redis"),
            PlaceholderDescriptor::text("CURRENT_FOCUS", "Current Focus", "What you're working on now")
                .with_default("Performance optimization and database query efficiency"),
            communication_style("Concise with code examples"),
            PlaceholderDescriptor::text("CODE_STYLE", "Code Style Preferences", "Your coding preferences")
                .with_default("Type hints, async/await patterns, clean architecture principles"),
            PlaceholderDescriptor::select(
                "PYTHON_EXPERTISE",
                "Python Expertise",
                "Your Python skill level",
                strings(&["Beginner", "Intermediate", "Expert"]),
            )
            .with_default("Expert"),
            PlaceholderDescriptor::text("OTHER_EXPERTISE", "Other Expertise", "Your skill level in other areas")
                .with_default("intermediate in database optimization"),
            session_goals("Optimize slow database queries in analytics pipeline\nImplement better caching strategies"),
            previous_context(
                "Working with time-series data, heavy aggregations\nFocus on horizontal scaling and performance monitoring",
            ),
        ],
    )
}

fn csharp_developer() -> Template {
    Template::new(
        "csharp-developer",
        "C# Developer",
        "For .NET developers working with C# applications",
        Some(TemplateCategory::Developer),
        CSHARP_DEVELOPER_BODY,
        vec![
            PlaceholderDescriptor::select(
                "APP_TYPE",
                "Application Type",
                "Type of application",
                strings(&[
                    "web API",
                    "desktop application",
                    "web application",
                    "microservice",
                    "console application",
                ]),
            )
            .with_default("web API"),
            PlaceholderDescriptor::select(
                "FRAMEWORK",
                "Primary Framework",
                "Main .NET framework",
                strings(&[".NET 8", ".NET 6", ".NET Framework 4.8", "ASP.NET Core", "Blazor"]),
            )
            .with_default(".NET 8"),
            PlaceholderDescriptor::select(
                "DATABASE",
                "Database",
                "Database technology",
                strings(&["SQL Server", "PostgreSQL", "SQLite", "Entity Framework", "Dapper"]),
            )
            .with_default("SQL Server"),
            PlaceholderDescriptor::text("PROJECT_NAME", "Project Name", "Current project name")
                .with_default("Enterprise web API"),
            PlaceholderDescriptor::text("PROJECT_DESCRIPTION", "Project Description", "Brief project description")
                .with_default("managing customer data and business logic"),
            PlaceholderDescriptor::text("DOTNET_VERSION", ".NET Version", ".NET version you're using")
                .with_default(".NET 8"),
            PlaceholderDescriptor::text("OTHER_LANGUAGES", "Other Languages", "Additional languages you use")
                .with_default("SQL, some JavaScript for frontend"),
            PlaceholderDescriptor::text("FRAMEWORKS", "Key Frameworks/Tools", "Main tools and frameworks")
                .with_default("ASP.NET Core, Entity Framework, AutoMapper, FluentValidation"),
            PlaceholderDescriptor::text("CURRENT_FOCUS", "Current Focus", "What you're working on now")
                .with_default("Clean architecture implementation and unit testing"),
            communication_style("Detailed explanations with examples"),
            PlaceholderDescriptor::text("CODE_STYLE", "Code Style Preferences", "Your coding preferences")
                .with_default("SOLID principles, dependency injection, comprehensive testing"),
            PlaceholderDescriptor::select(
                "CSHARP_EXPERTISE",
                "C# Expertise",
                "Your C#/.NET skill level",
                strings(&["Beginner", "Intermediate", "Expert"]),
            )
            .with_default("Expert"),
            PlaceholderDescriptor::text("OTHER_EXPERTISE", "Other Expertise", "Your skill level in other areas")
                .with_default("expert in software architecture, intermediate in cloud deployment"),
            session_goals("Implement clean architecture patterns\nImprove unit test coverage and quality"),
            previous_context(
                "Working on domain-driven design implementation\nFocus on maintainable and testable code structure",
            ),
        ],
    )
}

fn javascript_developer() -> Template {
    Template::new(
        "javascript-developer",
        "JavaScript Developer",
        "For frontend/fullstack developers working with JavaScript",
        Some(TemplateCategory::Developer),
        JAVASCRIPT_DEVELOPER_BODY,
        vec![
            PlaceholderDescriptor::select(
                "ROLE_TYPE",
                "Developer Role",
                "Your primary role",
                strings(&["Frontend", "Fullstack", "Node.js Backend"]),
            )
            .with_default("Frontend"),
            PlaceholderDescriptor::select(
                "APP_TYPE",
                "Application Type",
                "Type of application",
                strings(&[
                    "web application",
                    "single-page application",
                    "mobile app",
                    "API service",
                    "desktop app",
                ]),
            )
            .with_default("web application"),
            PlaceholderDescriptor::select(
                "FRAMEWORK",
                "Primary Framework",
                "Main JavaScript framework",
                strings(&["React", "Vue.js", "Angular", "Node.js", "Next.js", "Svelte"]),
            )
            .with_default("React"),
            PlaceholderDescriptor::select(
                "BACKEND",
                "Backend/Database",
                "Backend technology",
                strings(&["Node.js + Express", "REST APIs", "GraphQL", "Firebase", "Supabase"]),
            )
            .with_default("REST APIs"),
            PlaceholderDescriptor::text("PROJECT_NAME", "Project Name", "Current project name")
                .with_default("E-commerce dashboard"),
            PlaceholderDescriptor::text("PROJECT_DESCRIPTION", "Project Description", "Brief project description")
                .with_default("customer management and analytics interface"),
            PlaceholderDescriptor::text("OTHER_LANGUAGES", "Other Languages", "Additional languages you use")
                .with_default("HTML, CSS, some Python for automation"),
            PlaceholderDescriptor::text("FRAMEWORKS", "Key Frameworks/Tools", "Main tools and frameworks")
                .with_default("React, TypeScript, Tailwind CSS, React Query, Webpack"),
            PlaceholderDescriptor::text("CURRENT_FOCUS", "Current Focus", "What you're working on now")
                .with_default("Component architecture and state management optimization"),
            communication_style("Concise with code examples"),
            PlaceholderDescriptor::text("CODE_STYLE", "Code Style Preferences", "Your coding preferences")
                .with_default("Functional components, TypeScript, modular architecture, comprehensive testing"),
            PlaceholderDescriptor::select(
                "JS_EXPERTISE",
                "JavaScript Expertise",
                "Your JavaScript/TypeScript skill level",
                strings(&["Beginner", "Intermediate", "Expert"]),
            )
            .with_default("Expert"),
            PlaceholderDescriptor::text("OTHER_EXPERTISE", "Other Expertise", "Your skill level in other areas")
                .with_default("expert in React ecosystem, intermediate in backend development"),
            session_goals("Optimize component rendering performance\nImplement better error handling patterns"),
            previous_context(
                "Working on scalable component architecture\nFocus on user experience and performance optimization",
            ),
        ],
    )
}

fn custom_template() -> Template {
    Template::new(
        "custom-template",
        "Custom Template",
        "Create your own personalized session primer",
        Some(TemplateCategory::Custom),
        CUSTOM_TEMPLATE_BODY,
        vec![
            PlaceholderDescriptor::multiline(
                "CUSTOM_PROMPT",
                "Custom Session Primer",
                "Your personalized session primer template",
            )
            .with_default(CUSTOM_PROMPT_DEFAULT),
        ],
    )
}

/// All built-in templates, in catalog declaration order
pub fn builtin_templates() -> Vec<Template> {
    vec![
        powershell_admin(),
        python_developer(),
        csharp_developer(),
        javascript_developer(),
        custom_template(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_count_and_order() {
        let templates = builtin_templates();
        let ids: Vec<&str> = templates.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "powershell-admin",
                "python-developer",
                "csharp-developer",
                "javascript-developer",
                "custom-template",
            ]
        );
    }

    #[test]
    fn test_builtin_markers_all_declared() {
        for template in builtin_templates() {
            assert!(
                template.undeclared_markers().is_empty(),
                "template {} has undeclared markers: {:?}",
                template.id,
                template.undeclared_markers()
            );
        }
    }

    #[test]
    fn test_builtin_select_options_nonempty() {
        for template in builtin_templates() {
            for descriptor in &template.placeholders {
                if descriptor.kind == crate::catalog::PlaceholderKind::Select {
                    assert!(
                        !descriptor.options.is_empty(),
                        "select {} in {} has no options",
                        descriptor.key,
                        template.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_custom_template_default_has_no_markers() {
        // The custom template's default uses [BRACKET] placeholders, not {{}},
        // so rendering it never triggers nested expansion.
        let template = custom_template();
        let default = template.placeholders[0].default_value.as_deref().unwrap();
        assert!(crate::catalog::template::scan_markers(default).is_empty());
    }
}
