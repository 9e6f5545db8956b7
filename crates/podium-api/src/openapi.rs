use serde_json::{json, Value};

#[must_use]
pub fn openapi_v1_spec() -> Value {
    json!({
      "openapi": "3.0.3",
      "info": {
        "title": "podium API",
        "version": "v1"
      },
      "paths": {
        "/healthz": {"get": {"responses": {"200": {"description": "ok"}}}},
        "/readyz": {"get": {"responses": {"200": {"description": "ready"}, "503": {"description": "not ready"}}}},
        "/metrics": {"get": {"responses": {"200": {"description": "request metrics"}}}},
        "/v1/version": {"get": {"responses": {"200": {"description": "build identity"}}}},
        "/v1/openapi": {"get": {"responses": {"200": {"description": "this document"}}}},
        "/v1/session": {
          "get": {
            "responses": {"200": {"description": "session state"}}
          },
          "post": {
            "requestBody": {
              "required": true,
              "content": {"application/json": {"schema": {"$ref": "#/components/schemas/SignInRequest"}}}
            },
            "responses": {
              "200": {"description": "unlocked"},
              "400": {"description": "unreadable body", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ApiError"}}}},
              "401": {"description": "credential mismatch", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ApiError"}}}}
            }
          }
        },
        "/v1/roadmap": {
          "get": {
            "responses": {
              "200": {"description": "roadmap root view with navigator"},
              "304": {"description": "not modified"},
              "401": {"description": "session required", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ApiError"}}}}
            }
          }
        },
        "/v1/horizons/{key}": {
          "get": {
            "parameters": [
              {"name": "key", "in": "path", "required": true, "schema": {"type": "string", "enum": ["h1", "h2", "h3"]}}
            ],
            "responses": {
              "200": {"description": "horizon view"},
              "304": {"description": "not modified"},
              "401": {"description": "session required", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ApiError"}}}},
              "404": {"description": "unknown horizon", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ApiError"}}}}
            }
          }
        },
        "/v1/horizons/{key}/sections/{section}": {
          "get": {
            "parameters": [
              {"name": "key", "in": "path", "required": true, "schema": {"type": "string", "enum": ["h1", "h2", "h3"]}},
              {"name": "section", "in": "path", "required": true, "schema": {"type": "string", "enum": ["overview", "personas", "operating", "technical", "experience"]}}
            ],
            "responses": {
              "200": {"description": "section view"},
              "304": {"description": "not modified"},
              "401": {"description": "session required", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ApiError"}}}},
              "404": {"description": "unknown horizon or section", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ApiError"}}}}
            }
          }
        },
        "/v1/horizons/{key}/diagram": {
          "get": {
            "responses": {
              "200": {"description": "diagram view"},
              "304": {"description": "not modified"},
              "401": {"description": "session required", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ApiError"}}}},
              "404": {"description": "unknown horizon", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ApiError"}}}}
            }
          }
        },
        "/v1/horizons/{key}/cost-impact": {
          "get": {
            "responses": {
              "200": {"description": "cost impact view"},
              "304": {"description": "not modified"},
              "401": {"description": "session required", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ApiError"}}}},
              "404": {"description": "unknown horizon", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ApiError"}}}}
            }
          }
        },
        "/v1/trajectory": {
          "get": {
            "responses": {
              "200": {"description": "value trajectory view"},
              "304": {"description": "not modified"},
              "401": {"description": "session required", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ApiError"}}}}
            }
          }
        }
      },
      "components": {
        "schemas": {
          "SignInRequest": {
            "type": "object",
            "required": ["username", "password"],
            "additionalProperties": false,
            "properties": {
              "username": {"type": "string"},
              "password": {"type": "string"}
            }
          },
          "ApiErrorCode": {
            "type": "string",
            "enum": [
              "InvalidCredentials",
              "SessionRequired",
              "UnknownHorizon",
              "UnknownSection",
              "InvalidRequestBody",
              "NotReady",
              "Internal"
            ]
          },
          "ApiError": {
            "type": "object",
            "required": ["code", "message", "details"],
            "additionalProperties": false,
            "properties": {
              "code": {"$ref": "#/components/schemas/ApiErrorCode"},
              "message": {"type": "string"},
              "details": {"type": "object"}
            }
          }
        }
      }
    })
}
