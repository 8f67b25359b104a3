//! Server package: Express API with one full example module and a health check.
//!
//! Nothing precedes this pass inside `server/`, so its manifest is written
//! fresh as a JSON template instead of being merged.

use serde_json::{Value, json};

use crate::domain::entities::{DirectorySpec, ProjectConfig, TemplateFile};

pub const PACKAGE_DIR: &str = "server";

pub fn directories() -> DirectorySpec {
    DirectorySpec::new("server/src").with_dirs([
        "modules/user",
        "modules/user/__tests__",
        "modules/health",
        "shared/config",
        "shared/utils",
        "shared/middlewares",
        "shared/types",
        "shared/interfaces",
    ])
}

pub fn templates() -> Vec<TemplateFile> {
    vec![
        // Manifests and tooling
        TemplateFile::json("server/package.json", package_json),
        TemplateFile::json("server/tsconfig.json", tsconfig_json),
        TemplateFile::verbatim("server/rolldown.config.js", ROLLDOWN_CONFIG),
        TemplateFile::verbatim("server/vitest.config.ts", VITEST_CONFIG),
        // Shared
        TemplateFile::verbatim("server/src/shared/types/index.ts", SHARED_TYPES),
        TemplateFile::verbatim("server/src/shared/interfaces/index.ts", SHARED_INTERFACES),
        TemplateFile::verbatim("server/src/shared/config/index.ts", APP_CONFIG),
        TemplateFile::verbatim("server/src/shared/utils/logger.ts", LOGGER),
        TemplateFile::verbatim("server/src/shared/utils/error-handler.ts", ERROR_HANDLER),
        TemplateFile::verbatim(
            "server/src/shared/middlewares/validation.middleware.ts",
            VALIDATION_MIDDLEWARE,
        ),
        // User module
        TemplateFile::verbatim("server/src/modules/user/user.model.ts", USER_MODEL),
        TemplateFile::verbatim("server/src/modules/user/user.repository.ts", USER_REPOSITORY),
        TemplateFile::verbatim("server/src/modules/user/user.service.ts", USER_SERVICE),
        TemplateFile::verbatim("server/src/modules/user/user.controller.ts", USER_CONTROLLER),
        TemplateFile::verbatim("server/src/modules/user/user.routes.ts", USER_ROUTES),
        TemplateFile::verbatim("server/src/modules/user/index.ts", USER_INDEX),
        TemplateFile::verbatim(
            "server/src/modules/user/__tests__/user.service.test.ts",
            USER_SERVICE_TEST,
        ),
        TemplateFile::verbatim(
            "server/src/modules/user/__tests__/user.integration.test.ts",
            USER_INTEGRATION_TEST,
        ),
        // Health module
        TemplateFile::verbatim("server/src/modules/health/health.controller.ts", HEALTH_CONTROLLER),
        TemplateFile::verbatim("server/src/modules/health/health.routes.ts", HEALTH_ROUTES),
        TemplateFile::verbatim("server/src/modules/health/index.ts", HEALTH_INDEX),
        // Assembly
        TemplateFile::verbatim("server/src/app.ts", APP),
        TemplateFile::verbatim("server/src/index.ts", ENTRY),
        TemplateFile::verbatim("server/.env", ENV),
        TemplateFile::verbatim("server/.env.example", ENV),
    ]
}

fn package_json(config: &ProjectConfig) -> Value {
    json!({
        "name": format!("{}-server", config.name()),
        "version": "1.0.0",
        "type": "module",
        "scripts": {
            "dev": "tsx watch src/index.ts",
            "build": "rolldown",
            "start": "node dist/index.js",
            "test": "vitest",
            "test:ui": "vitest --ui",
            "test:coverage": "vitest --coverage"
        },
        "dependencies": {
            "express": "^4.18.2",
            "cors": "^2.8.5",
            "dotenv": "^16.3.1",
            "@cakki/orm": "latest",
            "reflect-metadata": "^0.2.1",
            "picocolors": "^1.0.0"
        },
        "devDependencies": {
            "@types/express": "^4.17.21",
            "@types/cors": "^2.8.17",
            "@types/node": "^20.10.0",
            "@types/supertest": "^6.0.2",
            "typescript": "^5.3.3",
            "tsx": "^4.7.0",
            "rolldown": "^0.15.1",
            "vitest": "^1.0.4",
            "supertest": "^6.3.3",
            "@vitest/coverage-v8": "^1.0.4"
        }
    })
}

fn tsconfig_json(_: &ProjectConfig) -> Value {
    json!({
        "compilerOptions": {
            "target": "ES2022",
            "module": "ESNext",
            "moduleResolution": "bundler",
            "outDir": "./dist",
            "rootDir": "./src",
            "strict": true,
            "esModuleInterop": true,
            "skipLibCheck": true,
            "forceConsistentCasingInFileNames": true,
            "resolveJsonModule": true,
            "experimentalDecorators": true,
            "emitDecoratorMetadata": true,
            "types": ["vitest/globals", "node"],
            "baseUrl": ".",
            "paths": {
                "@/*": ["src/*"],
                "@modules/*": ["src/modules/*"],
                "@shared/*": ["src/shared/*"]
            }
        },
        "include": ["src/**/*"],
        "exclude": ["node_modules", "dist"]
    })
}

// ── Tooling ─────────────────────────────────────────────────────────────────

const ROLLDOWN_CONFIG: &str = r#"import { defineConfig } from 'rolldown';

export default defineConfig({
  input: './src/index.ts',
  output: {
    dir: './dist',
    format: 'esm',
  },
  external: ['express', 'cors', 'dotenv', '@cakki/orm', 'reflect-metadata'],
  platform: 'node',
});
"#;

const VITEST_CONFIG: &str = r#"import { defineConfig } from 'vitest/config';
import path from 'path';

export default defineConfig({
  test: {
    globals: true,
    environment: 'node',
    coverage: {
      reporter: ['text', 'json', 'html'],
      exclude: ['node_modules/', 'dist/']
    }
  },
  resolve: {
    alias: {
      '@': path.resolve(__dirname, './src'),
      '@modules': path.resolve(__dirname, './src/modules'),
      '@shared': path.resolve(__dirname, './src/shared')
    }
  }
});
"#;

// ── Shared ──────────────────────────────────────────────────────────────────

const SHARED_TYPES: &str = r#"export interface ApiResponse<T = any> {
  success: boolean;
  data?: T;
  message?: string;
  error?: string;
}

export interface PaginatedResponse<T> extends ApiResponse<T[]> {
  pagination: {
    page: number;
    limit: number;
    total: number;
    totalPages: number;
  };
}
"#;

const SHARED_INTERFACES: &str = r#"import { Result } from '@shared/utils/error-handler';

export interface IService<T> {
  findAll(): Promise<T[]>;
  findById(id: string): Promise<Result<T>>;
  create(data: Partial<T>): Promise<Result<T>>;
  update(id: string, data: Partial<T>): Promise<Result<T>>;
  delete(id: string): Promise<Result<boolean>>;
}

export interface IRepository<T> {
  findAll(): Promise<T[]>;
  findById(id: string): Promise<T | null>;
  create(data: Partial<T>): Promise<T>;
  update(id: string, data: Partial<T>): Promise<T | null>;
  delete(id: string): Promise<boolean>;
}

export interface IController {
  setupRoutes(): void;
}
"#;

const APP_CONFIG: &str = r#"import dotenv from 'dotenv';

export interface AppConfig {
  port: number;
  nodeEnv: string;
  database: {
    url: string;
  };
  cors: {
    origin: string;
    credentials: boolean;
  };
  jwt: {
    secret: string;
    expiresIn: string;
  };
}

// Built once at startup and passed down explicitly; never imported as a global.
export function loadConfig(env: NodeJS.ProcessEnv = loadEnv()): AppConfig {
  return Object.freeze({
    port: parseInt(env.PORT || '3000', 10),
    nodeEnv: env.NODE_ENV || 'development',
    database: {
      url: env.DATABASE_URL || '',
    },
    cors: {
      origin: env.CORS_ORIGIN || 'http://localhost:5173',
      credentials: true,
    },
    jwt: {
      secret: env.JWT_SECRET || 'your-secret-key',
      expiresIn: env.JWT_EXPIRES_IN || '7d',
    },
  });
}

function loadEnv(): NodeJS.ProcessEnv {
  dotenv.config();
  return process.env;
}

export const isDevelopment = (config: AppConfig) => config.nodeEnv === 'development';
export const isProduction = (config: AppConfig) => config.nodeEnv === 'production';
export const isTest = (config: AppConfig) => config.nodeEnv === 'test';
"#;

const LOGGER: &str = r#"import pc from 'picocolors';

export class Logger {
  private context: string;

  constructor(context: string) {
    this.context = context;
  }

  info(message: string, ...args: any[]): void {
    console.log(pc.blue(`[${this.context}]`), message, ...args);
  }

  error(message: string, error?: Error | any): void {
    console.error(pc.red(`[${this.context}]`), message, error);
  }

  warn(message: string, ...args: any[]): void {
    console.warn(pc.yellow(`[${this.context}]`), message, ...args);
  }

  success(message: string, ...args: any[]): void {
    console.log(pc.green(`[${this.context}]`), message, ...args);
  }

  debug(message: string, ...args: any[]): void {
    if (process.env.NODE_ENV === 'development') {
      console.log(pc.gray(`[${this.context}]`), message, ...args);
    }
  }
}
"#;

const ERROR_HANDLER: &str = r#"import { Request, Response, NextFunction } from 'express';
import { Logger } from './logger';

const logger = new Logger('ErrorHandler');

export type ErrorKind = 'NotFound' | 'Conflict' | 'Internal';

export interface AppError {
  kind: ErrorKind;
  message: string;
}

export type Result<T> = { ok: true; value: T } | { ok: false; error: AppError };

export const ok = <T>(value: T): Result<T> => ({ ok: true, value });

export const fail = <T = never>(kind: ErrorKind, message: string): Result<T> => ({
  ok: false,
  error: { kind, message },
});

const STATUS: Record<ErrorKind, number> = {
  NotFound: 404,
  Conflict: 409,
  Internal: 500,
};

export const statusOf = (error: AppError): number => STATUS[error.kind];

/** Marks behaviour that is deliberately left for the application author. */
export class NotImplementedError extends Error {
  constructor(feature: string) {
    super(`Not implemented: ${feature}`);
    Object.setPrototypeOf(this, NotImplementedError.prototype);
  }
}

export const errorHandler = (
  err: Error,
  req: Request,
  res: Response,
  next: NextFunction
): void => {
  if (err instanceof NotImplementedError) {
    logger.warn(err.message);
    res.status(501).json({ success: false, error: err.message });
    return;
  }

  logger.error('Unexpected error:', err);
  res.status(500).json({
    success: false,
    error: 'Internal server error',
  });
};

export const asyncHandler = (
  fn: (req: Request, res: Response, next: NextFunction) => Promise<any>
) => {
  return (req: Request, res: Response, next: NextFunction) => {
    Promise.resolve(fn(req, res, next)).catch(next);
  };
};
"#;

const VALIDATION_MIDDLEWARE: &str = r#"import { Request, Response, NextFunction } from 'express';
import { Logger } from '@shared/utils/logger';

const logger = new Logger('Validation');

// Request-body validation is not implemented: requests pass through unchecked.
// Replace with a schema validator (Zod or similar).
export const validateRequest = (schema: unknown) => {
  return (req: Request, res: Response, next: NextFunction): void => {
    logger.warn(`validateRequest is not implemented; ${req.method} ${req.path} was not validated`);
    next();
  };
};
"#;

// ── User module ─────────────────────────────────────────────────────────────

const USER_MODEL: &str = r#"export interface User {
  id: string;
  email: string;
  name: string;
  createdAt: Date;
  updatedAt: Date;
}

export interface CreateUserDto {
  email: string;
  name: string;
  password: string;
}

export interface UpdateUserDto {
  email?: string;
  name?: string;
}
"#;

const USER_REPOSITORY: &str = r#"import { IRepository } from '@shared/interfaces';
import { NotImplementedError } from '@shared/utils/error-handler';
import { Logger } from '@shared/utils/logger';
import { User } from './user.model';

// Persistence is a stub until the @cakki/orm integration is written.
// Reads return empty results; writes raise NotImplementedError.
export class UserRepository implements IRepository<User> {
  private logger = new Logger('UserRepository');

  async findAll(): Promise<User[]> {
    this.logger.info('Finding all users');
    return [];
  }

  async findById(id: string): Promise<User | null> {
    this.logger.info(`Finding user by id: ${id}`);
    return null;
  }

  async findByEmail(email: string): Promise<User | null> {
    this.logger.info(`Finding user by email: ${email}`);
    return null;
  }

  async create(data: Partial<User>): Promise<User> {
    throw new NotImplementedError('UserRepository.create (@cakki/orm)');
  }

  async update(id: string, data: Partial<User>): Promise<User | null> {
    throw new NotImplementedError('UserRepository.update (@cakki/orm)');
  }

  async delete(id: string): Promise<boolean> {
    throw new NotImplementedError('UserRepository.delete (@cakki/orm)');
  }
}
"#;

const USER_SERVICE: &str = r#"import { IService } from '@shared/interfaces';
import { Result, fail, ok, NotImplementedError } from '@shared/utils/error-handler';
import { Logger } from '@shared/utils/logger';
import { User, CreateUserDto, UpdateUserDto } from './user.model';
import { UserRepository } from './user.repository';

export class UserService implements IService<User> {
  private logger = new Logger('UserService');

  constructor(private readonly userRepository: UserRepository = new UserRepository()) {}

  async findAll(): Promise<User[]> {
    this.logger.info('Fetching all users');
    return this.userRepository.findAll();
  }

  async findById(id: string): Promise<Result<User>> {
    this.logger.info(`Fetching user by id: ${id}`);
    const user = await this.userRepository.findById(id);
    return user ? ok(user) : fail('NotFound', 'User not found');
  }

  async createUser(data: CreateUserDto): Promise<Result<User>> {
    this.logger.info(`Creating user with email: ${data.email}`);

    const existingUser = await this.userRepository.findByEmail(data.email);
    if (existingUser) {
      return fail('Conflict', 'User with this email already exists');
    }

    hashPassword(data.password);
    const user = await this.userRepository.create({
      email: data.email,
      name: data.name,
    });

    this.logger.success(`User created: ${user.id}`);
    return ok(user);
  }

  async create(data: Partial<User>): Promise<Result<User>> {
    return ok(await this.userRepository.create(data));
  }

  async update(id: string, data: UpdateUserDto): Promise<Result<User>> {
    this.logger.info(`Updating user: ${id}`);

    const user = await this.userRepository.findById(id);
    if (!user) {
      return fail('NotFound', 'User not found');
    }

    const updatedUser = await this.userRepository.update(id, data);
    if (!updatedUser) {
      return fail('Internal', 'User update returned no record');
    }

    this.logger.success(`User updated: ${id}`);
    return ok(updatedUser);
  }

  async delete(id: string): Promise<Result<boolean>> {
    this.logger.info(`Deleting user: ${id}`);

    const user = await this.userRepository.findById(id);
    if (!user) {
      return fail('NotFound', 'User not found');
    }

    const deleted = await this.userRepository.delete(id);
    this.logger.success(`User deleted: ${id}`);
    return ok(deleted);
  }
}

// Password hashing is not implemented. Wire in bcrypt or argon2 before storing credentials.
function hashPassword(password: string): never {
  throw new NotImplementedError('password hashing');
}
"#;

const USER_CONTROLLER: &str = r#"import { Request, Response } from 'express';
import { UserService } from './user.service';
import { Result, asyncHandler, statusOf } from '@shared/utils/error-handler';
import { ApiResponse } from '@shared/types';

function send<T>(res: Response, result: Result<T>, message: string, status = 200): void {
  if (!result.ok) {
    const body: ApiResponse = { success: false, error: result.error.message };
    res.status(statusOf(result.error)).json(body);
    return;
  }

  const body: ApiResponse<T> = { success: true, data: result.value, message };
  res.status(status).json(body);
}

export class UserController {
  constructor(private readonly userService: UserService = new UserService()) {}

  getAll = asyncHandler(async (req: Request, res: Response): Promise<void> => {
    const users = await this.userService.findAll();
    send(res, { ok: true, value: users }, 'Users retrieved successfully');
  });

  getById = asyncHandler(async (req: Request, res: Response): Promise<void> => {
    const result = await this.userService.findById(req.params.id);
    send(res, result, 'User retrieved successfully');
  });

  create = asyncHandler(async (req: Request, res: Response): Promise<void> => {
    const result = await this.userService.createUser(req.body);
    send(res, result, 'User created successfully', 201);
  });

  update = asyncHandler(async (req: Request, res: Response): Promise<void> => {
    const result = await this.userService.update(req.params.id, req.body);
    send(res, result, 'User updated successfully');
  });

  delete = asyncHandler(async (req: Request, res: Response): Promise<void> => {
    const result = await this.userService.delete(req.params.id);
    send(res, result, 'User deleted successfully');
  });
}
"#;

const USER_ROUTES: &str = r#"import { Router } from 'express';
import { UserController } from './user.controller';

export class UserRoutes {
  public router: Router;
  private controller: UserController;

  constructor() {
    this.router = Router();
    this.controller = new UserController();
    this.setupRoutes();
  }

  private setupRoutes(): void {
    this.router.get('/', this.controller.getAll);
    this.router.get('/:id', this.controller.getById);
    this.router.post('/', this.controller.create);
    this.router.put('/:id', this.controller.update);
    this.router.delete('/:id', this.controller.delete);
  }
}
"#;

const USER_INDEX: &str = r#"export * from './user.model';
export * from './user.repository';
export * from './user.service';
export * from './user.controller';
export * from './user.routes';
"#;

const USER_SERVICE_TEST: &str = r#"import { describe, it, expect, beforeEach } from 'vitest';
import { UserService } from '../user.service';
import { UserRepository } from '../user.repository';

describe('UserService', () => {
  let userService: UserService;

  beforeEach(() => {
    userService = new UserService(new UserRepository());
  });

  it('returns an empty list when no users exist', async () => {
    expect(await userService.findAll()).toEqual([]);
  });

  it('reports NotFound for an unknown id', async () => {
    const result = await userService.findById('missing');
    expect(result.ok).toBe(false);
    if (!result.ok) {
      expect(result.error.kind).toBe('NotFound');
    }
  });
});
"#;

const USER_INTEGRATION_TEST: &str = r#"import { describe, it, expect } from 'vitest';
import request from 'supertest';
import { createApp } from '../../../app';
import { loadConfig } from '@shared/config';

const app = createApp(loadConfig({ NODE_ENV: 'test' }));

describe('User API Integration Tests', () => {
  it('should get all users', async () => {
    const response = await request(app).get('/api/users');

    expect(response.status).toBe(200);
    expect(response.body.success).toBe(true);
  });

  it('should return 404 for an unknown user', async () => {
    const response = await request(app).get('/api/users/missing');

    expect(response.status).toBe(404);
    expect(response.body.success).toBe(false);
  });
});
"#;

// ── Health module ───────────────────────────────────────────────────────────

const HEALTH_CONTROLLER: &str = r#"import { Request, Response } from 'express';
import { asyncHandler } from '@shared/utils/error-handler';

export class HealthController {
  constructor(private readonly environment: string) {}

  check = asyncHandler(async (req: Request, res: Response): Promise<void> => {
    res.json({
      success: true,
      data: {
        status: 'ok',
        timestamp: new Date().toISOString(),
        uptime: process.uptime(),
        environment: this.environment,
      },
    });
  });
}
"#;

const HEALTH_ROUTES: &str = r#"import { Router } from 'express';
import { HealthController } from './health.controller';

export class HealthRoutes {
  public router: Router;
  private controller: HealthController;

  constructor(environment: string) {
    this.router = Router();
    this.controller = new HealthController(environment);
    this.setupRoutes();
  }

  private setupRoutes(): void {
    this.router.get('/', this.controller.check);
  }
}
"#;

const HEALTH_INDEX: &str = r#"export * from './health.controller';
export * from './health.routes';
"#;

// ── Assembly ────────────────────────────────────────────────────────────────

const APP: &str = r#"import express, { Application } from 'express';
import cors from 'cors';
import { AppConfig, isDevelopment } from '@shared/config';
import { errorHandler } from '@shared/utils/error-handler';
import { Logger } from '@shared/utils/logger';
import { UserRoutes } from '@modules/user';
import { HealthRoutes } from '@modules/health';

const logger = new Logger('App');

export const createApp = (config: AppConfig): Application => {
  const app = express();

  // Middlewares
  app.use(cors(config.cors));
  app.use(express.json());
  app.use(express.urlencoded({ extended: true }));

  // Request logging in development
  if (isDevelopment(config)) {
    app.use((req, res, next) => {
      logger.debug(`${req.method} ${req.path}`);
      next();
    });
  }

  // Register module routes
  const userRoutes = new UserRoutes();
  const healthRoutes = new HealthRoutes(config.nodeEnv);

  app.use('/api/health', healthRoutes.router);
  app.use('/api/users', userRoutes.router);

  // Error handling
  app.use(errorHandler);

  return app;
};
"#;

const ENTRY: &str = r#"import 'reflect-metadata';
import { createApp } from './app';
import { loadConfig, isTest } from '@shared/config';
import { Logger } from '@shared/utils/logger';

const logger = new Logger('Server');

const config = loadConfig();
const app = createApp(config);

if (!isTest(config)) {
  app.listen(config.port, () => {
    logger.success(`Server running on port ${config.port}`);
    logger.info(`Environment: ${config.nodeEnv}`);
    logger.info(`API: http://localhost:${config.port}/api`);
  });
}

export { app };
"#;

const ENV: &str = "PORT=3000
NODE_ENV=development
DATABASE_URL=your_database_url_here
CORS_ORIGIN=http://localhost:5173
JWT_SECRET=your-jwt-secret-key-change-in-production
JWT_EXPIRES_IN=7d
";
