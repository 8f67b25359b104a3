//! Client package: directory plan, manifest patches and source templates.
//!
//! The frontend skeleton (`package.json`, `tsconfig.json`, `src/App.tsx`, …)
//! comes from the external scaffold tool; everything here is layered on top.

use serde_json::json;

use crate::domain::entities::{DirectorySpec, ManifestPatch, TemplateFile};

pub const PACKAGE_DIR: &str = "client";

pub fn directories() -> DirectorySpec {
    DirectorySpec::new("client/src").with_dirs([
        "components/ui",
        "components/features",
        "components/layout",
        "hooks",
        "services",
        "utils",
        "types",
        "stores",
        "constants",
        "test",
    ])
}

/// Patches applied after the scaffold tool has produced its manifests.
pub fn manifest_patches() -> Vec<ManifestPatch> {
    vec![
        ManifestPatch::from_value(
            "client/package.json",
            json!({
                "scripts": {
                    "test": "vitest",
                    "test:ui": "vitest --ui",
                    "test:coverage": "vitest --coverage"
                },
                "devDependencies": {
                    "@testing-library/react": "^14.1.2",
                    "@testing-library/jest-dom": "^6.1.5",
                    "@testing-library/user-event": "^14.5.1",
                    "@vitest/ui": "^1.0.4",
                    "@vitest/coverage-v8": "^1.0.4",
                    "jsdom": "^23.0.1",
                    "vitest": "^1.0.4"
                }
            }),
        ),
        ManifestPatch::from_value(
            "client/tsconfig.json",
            json!({
                "compilerOptions": {
                    "baseUrl": ".",
                    "paths": {
                        "@/*": ["src/*"],
                        "@components/*": ["src/components/*"],
                        "@hooks/*": ["src/hooks/*"],
                        "@services/*": ["src/services/*"],
                        "@utils/*": ["src/utils/*"],
                        "@types/*": ["src/types/*"],
                        "@stores/*": ["src/stores/*"],
                        "@constants/*": ["src/constants/*"]
                    }
                }
            }),
        )
        .only_if_present(),
    ]
}

pub fn templates() -> Vec<TemplateFile> {
    vec![
        TemplateFile::verbatim("client/vitest.config.ts", VITEST_CONFIG),
        TemplateFile::verbatim("client/vite.config.ts", VITE_CONFIG),
        TemplateFile::verbatim("client/src/types/index.ts", TYPES),
        TemplateFile::verbatim("client/src/services/api.service.ts", API_SERVICE),
        TemplateFile::verbatim("client/src/services/user.service.ts", USER_SERVICE),
        TemplateFile::verbatim("client/src/hooks/useApi.ts", USE_API),
        TemplateFile::parameterized("client/src/constants/index.ts", CONSTANTS),
        TemplateFile::verbatim("client/src/components/features/UserList.tsx", USER_LIST),
        TemplateFile::parameterized("client/src/components/layout/Layout.tsx", LAYOUT),
        TemplateFile::verbatim("client/src/utils/formatters.ts", FORMATTERS),
        TemplateFile::verbatim("client/.env", ENV),
        TemplateFile::verbatim("client/.env.example", ENV),
        TemplateFile::verbatim("client/src/test/setup.ts", TEST_SETUP),
        TemplateFile::verbatim("client/src/test/App.test.tsx", APP_TEST),
    ]
}

// ── Build tooling ───────────────────────────────────────────────────────────

const VITEST_CONFIG: &str = r#"import { defineConfig } from 'vitest/config';
import react from '@vitejs/plugin-react';
import path from 'path';

export default defineConfig({
  plugins: [react()],
  test: {
    globals: true,
    environment: 'jsdom',
    setupFiles: './src/test/setup.ts',
    coverage: {
      reporter: ['text', 'json', 'html'],
      exclude: [
        'node_modules/',
        'src/test/',
      ]
    }
  },
  resolve: {
    alias: {
      '@': path.resolve(__dirname, './src'),
      '@components': path.resolve(__dirname, './src/components'),
      '@hooks': path.resolve(__dirname, './src/hooks'),
      '@services': path.resolve(__dirname, './src/services'),
      '@utils': path.resolve(__dirname, './src/utils'),
      '@types': path.resolve(__dirname, './src/types'),
      '@stores': path.resolve(__dirname, './src/stores'),
      '@constants': path.resolve(__dirname, './src/constants'),
    },
  },
});
"#;

const VITE_CONFIG: &str = r#"import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'
import path from 'path'

// https://vitejs.dev/config/
export default defineConfig({
  plugins: [react()],
  resolve: {
    alias: {
      '@': path.resolve(__dirname, './src'),
      '@components': path.resolve(__dirname, './src/components'),
      '@hooks': path.resolve(__dirname, './src/hooks'),
      '@services': path.resolve(__dirname, './src/services'),
      '@utils': path.resolve(__dirname, './src/utils'),
      '@types': path.resolve(__dirname, './src/types'),
      '@stores': path.resolve(__dirname, './src/stores'),
      '@constants': path.resolve(__dirname, './src/constants'),
    },
  },
  server: {
    port: 5173,
    proxy: {
      '/api': {
        target: 'http://localhost:3000',
        changeOrigin: true,
      },
    },
  },
})
"#;

// ── Sources ─────────────────────────────────────────────────────────────────

const TYPES: &str = r#"export interface ApiResponse<T = any> {
  success: boolean;
  data?: T;
  message?: string;
  error?: string;
}

export interface User {
  id: string;
  email: string;
  name: string;
  createdAt: string;
  updatedAt: string;
}
"#;

const API_SERVICE: &str = r#"import { ApiResponse } from '@types/index';

class ApiService {
  private baseURL: string;

  constructor() {
    this.baseURL = import.meta.env.VITE_API_URL || 'http://localhost:3000/api';
  }

  private async request<T>(
    endpoint: string,
    options?: RequestInit
  ): Promise<ApiResponse<T>> {
    try {
      const response = await fetch(`${this.baseURL}${endpoint}`, {
        ...options,
        headers: {
          'Content-Type': 'application/json',
          ...options?.headers,
        },
      });

      const data = await response.json();

      if (!response.ok) {
        throw new Error(data.error || 'Request failed');
      }

      return data;
    } catch (error) {
      console.error('API Error:', error);
      throw error;
    }
  }

  async get<T>(endpoint: string): Promise<ApiResponse<T>> {
    return this.request<T>(endpoint, { method: 'GET' });
  }

  async post<T>(endpoint: string, body: any): Promise<ApiResponse<T>> {
    return this.request<T>(endpoint, {
      method: 'POST',
      body: JSON.stringify(body),
    });
  }

  async put<T>(endpoint: string, body: any): Promise<ApiResponse<T>> {
    return this.request<T>(endpoint, {
      method: 'PUT',
      body: JSON.stringify(body),
    });
  }

  async delete<T>(endpoint: string): Promise<ApiResponse<T>> {
    return this.request<T>(endpoint, { method: 'DELETE' });
  }
}

export const apiService = new ApiService();
"#;

const USER_SERVICE: &str = r#"import { apiService } from './api.service';
import { User } from '@types/index';

class UserService {
  async getUsers() {
    return apiService.get<User[]>('/users');
  }

  async getUserById(id: string) {
    return apiService.get<User>(`/users/${id}`);
  }

  async createUser(data: Partial<User>) {
    return apiService.post<User>('/users', data);
  }

  async updateUser(id: string, data: Partial<User>) {
    return apiService.put<User>(`/users/${id}`, data);
  }

  async deleteUser(id: string) {
    return apiService.delete(`/users/${id}`);
  }
}

export const userService = new UserService();
"#;

const USE_API: &str = r#"import { useState, useEffect } from 'react';
import { ApiResponse } from '@types/index';

interface UseApiState<T> {
  data: T | null;
  loading: boolean;
  error: string | null;
}

export function useApi<T>(
  apiCall: () => Promise<ApiResponse<T>>,
  deps: any[] = []
): UseApiState<T> {
  const [state, setState] = useState<UseApiState<T>>({
    data: null,
    loading: true,
    error: null,
  });

  useEffect(() => {
    let isMounted = true;

    const fetchData = async () => {
      try {
        setState(prev => ({ ...prev, loading: true, error: null }));
        const response = await apiCall();

        if (isMounted) {
          setState({
            data: response.data || null,
            loading: false,
            error: null,
          });
        }
      } catch (error) {
        if (isMounted) {
          setState({
            data: null,
            loading: false,
            error: error instanceof Error ? error.message : 'An error occurred',
          });
        }
      }
    };

    fetchData();

    return () => {
      isMounted = false;
    };
  }, deps);

  return state;
}
"#;

const CONSTANTS: &str = r#"export const API_ENDPOINTS = {
  USERS: '/users',
  HEALTH: '/health',
} as const;

export const APP_CONFIG = {
  APP_NAME: '{{PROJECT_NAME}}',
  VERSION: '1.0.0',
} as const;
"#;

const USER_LIST: &str = r#"import { useApi } from '@hooks/useApi';
import { userService } from '@services/user.service';
import { User } from '@types/index';

export function UserList() {
  const { data: users, loading, error } = useApi<User[]>(
    () => userService.getUsers(),
    []
  );

  if (loading) return <div>Loading...</div>;
  if (error) return <div>Error: {error}</div>;
  if (!users || users.length === 0) return <div>No users found</div>;

  return (
    <div>
      <h2>Users</h2>
      <ul>
        {users.map((user) => (
          <li key={user.id}>
            {user.name} ({user.email})
          </li>
        ))}
      </ul>
    </div>
  );
}
"#;

const LAYOUT: &str = r#"import { ReactNode } from 'react';

interface LayoutProps {
  children: ReactNode;
}

export function Layout({ children }: LayoutProps) {
  return (
    <div className="min-h-screen bg-gray-50">
      <header className="bg-white shadow">
        <div className="max-w-7xl mx-auto py-6 px-4">
          <h1 className="text-3xl font-bold text-gray-900">{{PROJECT_NAME}}</h1>
        </div>
      </header>
      <main className="max-w-7xl mx-auto py-6 px-4">
        {children}
      </main>
    </div>
  );
}
"#;

const FORMATTERS: &str = r#"export function formatDate(date: string | Date): string {
  return new Date(date).toLocaleDateString('en-US', {
    year: 'numeric',
    month: 'long',
    day: 'numeric',
  });
}

export function formatCurrency(amount: number, currency = 'USD'): string {
  return new Intl.NumberFormat('en-US', {
    style: 'currency',
    currency,
  }).format(amount);
}
"#;

const ENV: &str = "VITE_API_URL=http://localhost:3000/api\n";

// ── Tests ───────────────────────────────────────────────────────────────────

const TEST_SETUP: &str = "import '@testing-library/jest-dom';\n";

const APP_TEST: &str = r#"import { render, screen } from '@testing-library/react';
import { describe, it, expect } from 'vitest';
import App from '../App';

describe('App', () => {
  it('renders without crashing', () => {
    render(<App />);
    expect(screen.getByText(/vite/i)).toBeInTheDocument();
  });
});
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_lives_under_client() {
        for t in templates() {
            assert!(t.path().as_path().starts_with(PACKAGE_DIR), "{}", t.path());
        }
    }

    #[test]
    fn env_pair_is_identical() {
        let files = templates();
        let body = |p: &str| {
            files
                .iter()
                .find(|t| t.path().to_string() == p)
                .map(|t| format!("{:?}", t.body()))
        };
        assert_eq!(body("client/.env"), body("client/.env.example"));
    }

    #[test]
    fn tsconfig_patch_is_conditional() {
        let patches = manifest_patches();
        assert!(!patches[0].is_conditional());
        assert!(patches[1].is_conditional());
        assert_eq!(patches[1].target().to_string(), "client/tsconfig.json");
    }
}
