//! Project scaffolding for `tyscan new`.
//!
//! Emits a fixed Worker-style TypeScript skeleton into a new directory.
//! Deterministic per call: the same name and flags always produce the same
//! tree. Refuses to touch an existing target.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
/// Feature flags controlling which bindings the skeleton declares.
pub struct ScaffoldOptions {
    pub with_d1: bool,
    pub with_kv: bool,
    pub with_r2: bool,
}

const WRANGLER_TEMPLATE: &str = r#"name = "{name}"
main = "src/index.ts"
compatibility_date = "2024-01-01"
compatibility_flags = ["nodejs_compat"]

[vars]
ENVIRONMENT = "development"

{bindings}
"#;

const D1_BINDING: &str = r#"[[d1_databases]]
binding = "DB"
database_name = "{name}-db"
database_id = "TODO: run 'wrangler d1 create {name}-db' and paste ID here"
"#;

const KV_BINDING: &str = r#"[[kv_namespaces]]
binding = "KV"
id = "TODO: run 'wrangler kv:namespace create KV' and paste ID here"
"#;

const R2_BINDING: &str = r#"[[r2_buckets]]
binding = "BUCKET"
bucket_name = "{name}-bucket"
"#;

const INDEX_TS: &str = r#"import { Hono } from 'hono';
import { cors } from 'hono/cors';

interface Env {
  ENVIRONMENT: string;
{env_types}
}

const app = new Hono<{ Bindings: Env }>();

app.use('*', cors());

app.get('/', (c) => {
  return c.json({
    message: 'Hello from {name}!',
    environment: c.env.ENVIRONMENT,
  });
});

app.get('/health', (c) => {
  return c.json({ status: 'ok' });
});

export default app;
"#;

const PACKAGE_JSON: &str = r#"{
  "name": "{name}",
  "version": "0.1.0",
  "private": true,
  "scripts": {
    "dev": "wrangler dev",
    "deploy": "wrangler deploy",
    "test": "vitest"
  },
  "dependencies": {
    "hono": "^4.0.0"
  },
  "devDependencies": {
    "@cloudflare/workers-types": "^4.0.0",
    "typescript": "^5.0.0",
    "vitest": "^1.0.0",
    "wrangler": "^3.0.0"
  }
}
"#;

const TSCONFIG_JSON: &str = r#"{
  "compilerOptions": {
    "target": "ES2022",
    "module": "ESNext",
    "moduleResolution": "bundler",
    "lib": ["ES2022"],
    "types": ["@cloudflare/workers-types"],
    "strict": true,
    "noUncheckedIndexedAccess": true,
    "skipLibCheck": true
  },
  "include": ["src/**/*"],
  "exclude": ["node_modules"]
}
"#;

const GITIGNORE: &str = "node_modules/\ndist/\n.wrangler/\n.dev.vars\n";

fn render(template: &str, name: &str) -> String {
    template.replace("{name}", name)
}

/// Create the project skeleton at `parent/<name>`.
///
/// Fails with `AlreadyExists` when the target directory is present; any
/// partial tree from an I/O failure is left for the caller to inspect.
pub fn create_project(parent: &Path, name: &str, opts: &ScaffoldOptions) -> io::Result<PathBuf> {
    let project = parent.join(name);
    if project.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Directory '{}' already exists", name),
        ));
    }

    fs::create_dir_all(project.join("src"))?;
    fs::create_dir(project.join("test"))?;

    let mut bindings: Vec<String> = Vec::new();
    let mut env_types: Vec<&str> = Vec::new();
    if opts.with_d1 {
        bindings.push(render(D1_BINDING, name));
        env_types.push("  DB: D1Database;");
        fs::create_dir(project.join("migrations"))?;
    }
    if opts.with_kv {
        bindings.push(KV_BINDING.to_string());
        env_types.push("  KV: KVNamespace;");
    }
    if opts.with_r2 {
        bindings.push(render(R2_BINDING, name));
        env_types.push("  BUCKET: R2Bucket;");
    }

    let wrangler = render(WRANGLER_TEMPLATE, name).replace("{bindings}", &bindings.join("\n"));
    fs::write(project.join("wrangler.toml"), wrangler)?;

    let env_block = if env_types.is_empty() {
        "  // Add bindings here".to_string()
    } else {
        env_types.join("\n")
    };
    let index = render(INDEX_TS, name).replace("{env_types}", &env_block);
    fs::write(project.join("src/index.ts"), index)?;

    fs::write(project.join("package.json"), render(PACKAGE_JSON, name))?;
    fs::write(project.join("tsconfig.json"), TSCONFIG_JSON)?;
    fs::write(project.join(".gitignore"), GITIGNORE)?;

    Ok(project)
}

/// Post-creation hints mirroring the bindings that still need provisioning.
pub fn next_steps(name: &str, opts: &ScaffoldOptions) -> Vec<String> {
    let mut steps = vec![format!("cd {}", name), "npm install".to_string()];
    if opts.with_d1 {
        steps.push(format!("wrangler d1 create {}-db", name));
        steps.push("# Update wrangler.toml with database_id".to_string());
    }
    if opts.with_kv {
        steps.push("wrangler kv:namespace create KV".to_string());
        steps.push("# Update wrangler.toml with namespace id".to_string());
    }
    if opts.with_r2 {
        steps.push(format!("wrangler r2 bucket create {}-bucket", name));
    }
    steps.push("npm run dev".to_string());
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_creates_base_skeleton() {
        let dir = tempdir().unwrap();
        let opts = ScaffoldOptions::default();
        let project = create_project(dir.path(), "my-api", &opts).unwrap();
        assert!(project.join("wrangler.toml").is_file());
        assert!(project.join("src/index.ts").is_file());
        assert!(project.join("package.json").is_file());
        assert!(project.join("tsconfig.json").is_file());
        assert!(project.join(".gitignore").is_file());
        assert!(project.join("test").is_dir());
        assert!(!project.join("migrations").exists());

        let wrangler = fs::read_to_string(project.join("wrangler.toml")).unwrap();
        assert!(wrangler.contains("name = \"my-api\""));
        assert!(!wrangler.contains("d1_databases"));

        let index = fs::read_to_string(project.join("src/index.ts")).unwrap();
        assert!(index.contains("// Add bindings here"));
        assert!(index.contains("Hello from my-api!"));
    }

    #[test]
    fn test_flags_drive_bindings_and_env_types() {
        let dir = tempdir().unwrap();
        let opts = ScaffoldOptions {
            with_d1: true,
            with_kv: true,
            with_r2: false,
        };
        let project = create_project(dir.path(), "my-api", &opts).unwrap();
        assert!(project.join("migrations").is_dir());

        let wrangler = fs::read_to_string(project.join("wrangler.toml")).unwrap();
        assert!(wrangler.contains("database_name = \"my-api-db\""));
        assert!(wrangler.contains("kv_namespaces"));
        assert!(!wrangler.contains("r2_buckets"));

        let index = fs::read_to_string(project.join("src/index.ts")).unwrap();
        assert!(index.contains("DB: D1Database;"));
        assert!(index.contains("KV: KVNamespace;"));
        assert!(!index.contains("BUCKET"));
    }

    #[test]
    fn test_existing_target_is_refused() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("taken")).unwrap();
        let err = create_project(dir.path(), "taken", &ScaffoldOptions::default()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_deterministic_output() {
        let a = tempdir().unwrap();
        let b = tempdir().unwrap();
        let opts = ScaffoldOptions {
            with_d1: false,
            with_kv: true,
            with_r2: true,
        };
        let pa = create_project(a.path(), "svc", &opts).unwrap();
        let pb = create_project(b.path(), "svc", &opts).unwrap();
        for file in ["wrangler.toml", "src/index.ts", "package.json"] {
            assert_eq!(
                fs::read_to_string(pa.join(file)).unwrap(),
                fs::read_to_string(pb.join(file)).unwrap()
            );
        }
    }

    #[test]
    fn test_next_steps_reflect_flags() {
        let steps = next_steps(
            "svc",
            &ScaffoldOptions {
                with_d1: true,
                with_kv: false,
                with_r2: true,
            },
        );
        assert!(steps.iter().any(|s| s == "wrangler d1 create svc-db"));
        assert!(steps.iter().any(|s| s == "wrangler r2 bucket create svc-bucket"));
        assert!(!steps.iter().any(|s| s.contains("kv:namespace")));
    }
}
