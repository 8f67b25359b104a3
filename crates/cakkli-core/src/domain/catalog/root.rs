//! Root-level files: workspace manifest, lint/format configuration, README.
//!
//! The README is the only style-conditioned template in the whole catalogue.

use serde_json::{Value, json};

use crate::domain::entities::{ProjectConfig, TemplateFile};

pub fn templates() -> Vec<TemplateFile> {
    vec![
        TemplateFile::json("package.json", package_json),
        TemplateFile::verbatim(".gitignore", GITIGNORE),
        TemplateFile::json(".eslintrc.json", eslint_json),
        TemplateFile::json(".prettierrc.json", prettier_json),
        TemplateFile::parameterized("README.md", README),
    ]
}

fn package_json(config: &ProjectConfig) -> Value {
    json!({
        "name": config.name().as_str(),
        "version": "1.0.0",
        "private": true,
        "scripts": {
            "dev:client": "cd client && npm run dev",
            "dev:server": "cd server && npm run dev",
            "dev": "concurrently \"npm run dev:server\" \"npm run dev:client\"",
            "test:client": "cd client && npm test",
            "test:server": "cd server && npm test",
            "test": "npm run test:server && npm run test:client",
            "install:all": "npm install && cd client && npm install && cd ../server && npm install",
            "lint": "eslint . --ext .ts,.tsx",
            "lint:fix": "eslint . --ext .ts,.tsx --fix",
            "format": "prettier --write \"**/*.{ts,tsx,json,md}\"",
            "prepare": "husky install"
        },
        "devDependencies": {
            "concurrently": "^8.2.2",
            "@typescript-eslint/eslint-plugin": "^6.21.0",
            "@typescript-eslint/parser": "^6.21.0",
            "eslint": "^8.56.0",
            "prettier": "^3.2.4",
            "husky": "^8.0.3",
            "lint-staged": "^15.2.0"
        }
    })
}

fn eslint_json(_: &ProjectConfig) -> Value {
    json!({
        "root": true,
        "extends": ["eslint:recommended", "plugin:@typescript-eslint/recommended"],
        "parser": "@typescript-eslint/parser",
        "plugins": ["@typescript-eslint"],
        "ignorePatterns": ["dist", "build", "node_modules"]
    })
}

fn prettier_json(_: &ProjectConfig) -> Value {
    json!({
        "semi": true,
        "trailingComma": "es5",
        "singleQuote": true,
        "printWidth": 80,
        "tabWidth": 2,
        "useTabs": false
    })
}

const GITIGNORE: &str = "# Dependencies
node_modules/
.pnp
.pnp.js

# Testing
coverage/
.vitest/

# Production
dist/
build/
*.tsbuildinfo

# Environment
.env
.env.local
.env.*.local

# Logs
*.log

# Editor
.vscode/*
!.vscode/extensions.json
!.vscode/settings.json
.idea/
.DS_Store

# Temporary
*.tmp
.cache/
.eslintcache
";

const README: &str = r#"# {{PROJECT_NAME}}

Full-stack TypeScript application with **modular architecture**.

## 📁 Project Structure

### Backend - Modular Architecture (server/)

```
server/
├── src/
│   ├── modules/              # Feature modules (self-contained)
│   │   ├── user/             # User module
│   │   │   ├── user.model.ts
│   │   │   ├── user.repository.ts
│   │   │   ├── user.service.ts
│   │   │   ├── user.controller.ts
│   │   │   ├── user.routes.ts
│   │   │   ├── index.ts
│   │   │   └── __tests__/
│   │   ├── health/           # Health check module
│   │   │   ├── health.controller.ts
│   │   │   ├── health.routes.ts
│   │   │   └── index.ts
│   │   └── [feature]/        # Add more modules here
│   │
│   ├── shared/               # Shared resources
│   │   ├── config/           # App configuration (loadConfig)
│   │   ├── utils/            # Utilities (Logger, ErrorHandler)
│   │   ├── middlewares/      # Express middlewares
│   │   ├── types/            # Shared TypeScript types
│   │   └── interfaces/       # Shared interfaces
│   │
│   ├── app.ts                # createApp(config)
│   └── index.ts              # Entry point
└── package.json
```

### Frontend - Feature-Based Architecture (client/)

```
client/
├── src/
│   ├── components/
│   │   ├── ui/               # Reusable UI components
│   │   ├── features/         # Feature-specific components
│   │   └── layout/           # Layout components
│   ├── hooks/                # Custom React hooks
│   ├── services/             # API service classes
│   ├── stores/               # State management
│   ├── utils/                # Utility functions
│   ├── types/                # TypeScript types
│   ├── constants/            # App constants
│   └── test/                 # Test setup
└── package.json
```

## 🚀 Tech Stack

### Backend
- **Node.js 20+** with TypeScript
- **Express.js** with class-based controllers
- **Modular architecture** (feature-based modules)
- **@cakki/orm** for database operations (repository is a stub until wired up)
- **Rolldown** for optimized bundling
- **Vitest + Supertest** for testing
- **Path aliases**: `@modules`, `@shared`

### Frontend
- **React 18+** with TypeScript
- **Vite** for fast development{{#shadcn}}
- **shadcn/ui** for UI components{{/shadcn}}{{#mantine}}
- **Mantine** for UI components{{/mantine}}
- **Vitest + Testing Library** for testing
- **Path aliases**: `@components`, `@services`, etc.

## 📦 Getting Started

```bash
# Install dependencies
npm run install:all

# Setup environment variables
cp server/.env.example server/.env
cp client/.env.example client/.env
# Edit both .env files

# Start development
npm run dev
```

{{#shadcn}}### shadcn/ui Setup
```bash
cd client && npx shadcn@latest init && cd ..
```

{{/shadcn}}## 🛠️ Available Scripts

```bash
npm run dev              # Run both servers
npm run dev:client       # Frontend only (http://localhost:5173)
npm run dev:server       # Backend only (http://localhost:3000)

npm test                 # Run all tests
npm run lint             # Lint code
npm run format           # Format code
```

## 📝 License

MIT
"#;
