//! Keyword tables that drive triage.
//!
//! Both tables match case-insensitively as substrings of a skill's id and
//! description. Exclusions are checked first; the relevance table is ordered
//! and the first match wins.

/// Ordered relevance table: keyword → destination category.
pub const RELEVANT_KEYWORDS: &[(&str, &str)] = &[
    // Backend
    ("nodejs", "backend"),
    ("express", "backend"),
    ("nestjs", "backend"),
    ("prisma", "backend"),
    ("postgres", "backend"),
    ("postgres-best", "backend"),
    ("neon", "backend"),
    ("redis", "backend"),
    ("bullmq", "backend"),
    ("socket", "backend"),
    ("socket-io", "backend"),
    ("api-pattern", "backend"),
    ("api-security", "backend"),
    ("backend", "backend"),
    ("database", "backend"),
    // Frontend: Angular
    ("angular", "frontend"),
    ("primeng", "frontend"),
    ("transloco", "frontend"),
    ("signals", "frontend"),
    // Frontend: React
    ("react", "frontend"),
    ("vite", "frontend"),
    ("zustand", "frontend"),
    // Frontend: shared
    ("tailwind", "frontend"),
    ("ui-ux", "frontend"),
    ("responsive", "frontend"),
    ("accessibility", "frontend"),
    // TypeScript / code quality
    ("typescript", "code-quality"),
    ("clean-code", "code-quality"),
    ("test-driven", "code-quality"),
    ("tdd", "code-quality"),
    ("testing", "code-quality"),
    ("jest", "code-quality"),
    ("jasmine", "code-quality"),
    ("karma", "code-quality"),
    ("playwright", "code-quality"),
    ("systematic-debug", "code-quality"),
    // DevOps
    ("docker", "devops"),
    ("deployment", "devops"),
    ("github", "devops"),
    ("ci-cd", "devops"),
    // Git
    ("git", "productivity"),
    ("git-pushing", "productivity"),
    // Security
    ("security", "security"),
    ("auth", "security"),
    ("jwt", "security"),
    ("oauth", "security"),
    // AI integration
    ("ai", "ai"),
    ("gemini", "ai"),
    ("tts", "ai"),
    ("rag", "ai"),
    ("prompt", "ai"),
    ("agent", "ai"),
    // Project specific
    ("audio", "project-specific"),
    ("book", "project-specific"),
    ("narration", "project-specific"),
];

/// Any match sends the record straight to removal.
pub const EXCLUDED_KEYWORDS: &[&str] = &[
    // Gaming
    "game",
    "2d-game",
    "3d-game",
    "unreal",
    // Pentesting
    "penetration",
    "pentest",
    "hacking",
    "exploit",
    "burp",
    "metasploit",
    "sql-injection",
    "xss",
    "idor",
    "directory-traversal",
    "privilege-escalation",
    "active-directory",
    "kerberos",
    // Marketing
    "marketing",
    "seo",
    "cro",
    "affiliate",
    "viral",
    "email-sequence",
    "social-content",
    "form-cro",
    "copywriting",
    "branding",
    "app-store-optimization",
    "launch-strategy",
    // CMS / no-code
    "wordpress",
    "shopify",
    "notion",
    "moodle",
    "zapier",
    "make",
    // Clouds we do not target
    "aws",
    "azure",
    "gcp",
    "firebase",
    "vercel",
    "netlify",
    // Other
    "windows",
    "powershell",
    "saas-builder",
    "micro-saas",
    "business",
    "crm",
    "pricing",
    "referral",
];
