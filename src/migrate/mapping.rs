//! Static relocation tables.
//!
//! The category layout is created up front; the destination table maps each
//! known skill id to its folder under the skills root. Ids absent from the
//! table are reported as unmapped and left in place.

/// Folders created under the skills root before any copy.
pub const CATEGORY_LAYOUT: &[&str] = &[
    "backend",
    "frontend/angular",
    "frontend/react",
    "frontend/shared",
    "fullstack",
    "ai-integration",
    "devops",
    "testing",
    "code-quality",
    "security",
    "productivity",
    "project-specific",
];

/// Skill id → destination folder, relative to the skills root.
pub const SKILL_DESTINATIONS: &[(&str, &str)] = &[
    // Backend
    ("backend-dev-guidelines", "backend"),
    ("bullmq-specialist", "backend"),
    ("cc-skill-backend-patterns", "backend"),
    ("database-design", "backend"),
    ("docker-expert", "devops"),
    ("neon-postgres", "backend"),
    ("nodejs-best-practices", "backend"),
    ("nosql-expert", "backend"),
    ("postgres-best-practices", "backend"),
    ("prisma-expert", "backend"),
    ("redis-patterns", "backend"),
    ("api-patterns", "backend"),
    // Frontend: React
    ("react-patterns", "frontend/react"),
    ("react-ui-patterns", "frontend/react"),
    ("react-best-practices", "frontend/react"),
    ("frontend-dev-guidelines", "frontend/react"),
    ("cc-skill-frontend-patterns", "frontend/react"),
    // Frontend: Angular
    ("angular-best-practices", "frontend/angular"),
    // Frontend: shared
    ("tailwind-patterns", "frontend/shared"),
    ("ui-ux-pro-max", "frontend/shared"),
    ("frontend-design", "frontend/shared"),
    ("web-design-guidelines", "frontend/shared"),
    ("web-artifacts-builder", "frontend/shared"),
    ("3d-web-experience", "frontend/shared"),
    ("mobile-design", "frontend/shared"),
    ("claude-d3js-skill", "frontend/shared"),
    ("algolia-search", "frontend/shared"),
    ("remotion-best-practices", "frontend/shared"),
    // Code quality
    ("clean-code", "code-quality"),
    ("test-driven-development", "code-quality"),
    ("testing-patterns", "code-quality"),
    ("systematic-debugging", "code-quality"),
    ("typescript-expert", "code-quality"),
    ("code-review-checklist", "code-quality"),
    ("bun-development", "code-quality"),
    ("cc-skill-coding-standards", "code-quality"),
    ("performance-profiling", "code-quality"),
    ("lint-and-validate", "code-quality"),
    ("production-code-audit", "code-quality"),
    // Testing
    ("playwright-skill", "testing"),
    ("browser-automation", "testing"),
    ("webapp-testing", "testing"),
    ("agent-evaluation", "testing"),
    ("test-fixing", "testing"),
    // AI integration
    ("crewai", "ai-integration"),
    ("ai-agents-architect", "ai-integration"),
    ("agent-memory-mcp", "ai-integration"),
    ("agent-memory-systems", "ai-integration"),
    ("agent-tool-builder", "ai-integration"),
    ("ai-product", "ai-integration"),
    ("ai-wrapper-product", "ai-integration"),
    ("autonomous-agent-patterns", "ai-integration"),
    ("autonomous-agents", "ai-integration"),
    ("langgraph", "ai-integration"),
    ("llm-app-patterns", "ai-integration"),
    ("prompt-engineer", "ai-integration"),
    ("prompt-engineering", "ai-integration"),
    ("prompt-library", "ai-integration"),
    ("rag-engineer", "ai-integration"),
    ("rag-implementation", "ai-integration"),
    ("research-engineer", "ai-integration"),
    ("voice-agents", "ai-integration"),
    ("voice-ai-development", "ai-integration"),
    ("context-window-management", "ai-integration"),
    ("conversation-memory", "ai-integration"),
    ("prompt-caching", "ai-integration"),
    ("langfuse", "ai-integration"),
    ("agent-manager-skill", "ai-integration"),
    ("behavioral-modes", "ai-integration"),
    ("context7-auto-research", "ai-integration"),
    ("dispatching-parallel-agents", "ai-integration"),
    ("loki-mode", "ai-integration"),
    ("multi-agent-brainstorming", "ai-integration"),
    ("parallel-agents", "ai-integration"),
    ("subagent-driven-development", "ai-integration"),
    // Security
    ("api-security-best-practices", "security"),
    ("cc-skill-security-review", "security"),
    ("clerk-auth", "security"),
    ("nextjs-supabase-auth", "security"),
    // DevOps
    ("address-github-comments", "devops"),
    ("deployment-procedures", "devops"),
    ("git-pushing", "devops"),
    ("github-workflow-automation", "devops"),
    ("writing-skills", "devops"),
    ("architecture", "devops"),
    // Productivity
    ("brainstorming", "productivity"),
    ("plan-writing", "productivity"),
    ("planning-with-files", "productivity"),
    ("executing-plans", "productivity"),
    ("finishing-a-development-branch", "productivity"),
    ("requesting-code-review", "productivity"),
    ("receiving-code-review", "productivity"),
    ("documentation-templates", "productivity"),
    ("kaizen", "productivity"),
    ("verification-before-completion", "productivity"),
    ("environment-setup-guide", "productivity"),
    // Fullstack
    ("graphql", "fullstack"),
    ("file-uploads", "fullstack"),
    ("stripe-integration", "fullstack"),
    ("inngest", "fullstack"),
    ("trigger-dev", "fullstack"),
    ("firecrawl-scraper", "fullstack"),
    ("i18n-localization", "fullstack"),
    ("error-handling-patterns", "fullstack"),
    // Project specific
    ("notebooklm", "project-specific"),
];

/// Look up the destination folder for a skill id.
pub fn destination_for(id: &str) -> Option<&'static str> {
    SKILL_DESTINATIONS
        .iter()
        .find(|(skill_id, _)| *skill_id == id)
        .map(|(_, folder)| *folder)
}
