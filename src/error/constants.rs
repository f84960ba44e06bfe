use super::const_error;

const_error!(INTERNAL, INTERNAL_SERVER_ERROR, "INTERNAL", "internal server error");
const_error!(
    DATABASE_ERROR,
    INTERNAL_SERVER_ERROR,
    "INTERNAL",
    "internal server error"
);
const_error!(
    JSON_MISSING_FIELDS,
    UNPROCESSABLE_ENTITY,
    "JSON_MISSING_FIELDS",
    "missing fields"
);
const_error!(JSON_SYNTAX_ERROR, BAD_REQUEST, "JSON_SYNTAX_ERROR", "syntax error");
const_error!(
    JSON_CONTENT_TYPE,
    BAD_REQUEST,
    "JSON_CONTENT_TYPE",
    "missing or wrong content-type"
);
const_error!(INVALID_DATA, BAD_REQUEST, "BAD_REQUEST", "invalid data");
const_error!(
    INVALID_QUERY,
    BAD_REQUEST,
    "BAD_REQUEST",
    "missing or invalid query parameters"
);
const_error!(
    DUPLICATE_MEMBER,
    BAD_REQUEST,
    "BAD_REQUEST",
    "duplicate user_id in members"
);
const_error!(
    DUPLICATE_USER_ID,
    BAD_REQUEST,
    "BAD_REQUEST",
    "duplicate user_id in user_ids"
);
const_error!(NOT_FOUND, NOT_FOUND, "NOT_FOUND", "resource not found");
// Fallback for `engine::Error::AlreadyExists`; routes that can create a
// resource answer with PR_EXISTS or TEAM_EXISTS instead.
const_error!(ALREADY_EXISTS, CONFLICT, "ALREADY_EXISTS", "resource already exists");
const_error!(PR_EXISTS, CONFLICT, "PR_EXISTS", "PR already exists");
const_error!(TEAM_EXISTS, BAD_REQUEST, "TEAM_EXISTS", "team_name already exists");
const_error!(PR_MERGED, CONFLICT, "PR_MERGED", "cannot reassign on merged PR");
const_error!(
    NOT_ASSIGNED,
    CONFLICT,
    "NOT_ASSIGNED",
    "reviewer is not assigned to this PR"
);
const_error!(
    NO_CANDIDATE,
    CONFLICT,
    "NO_CANDIDATE",
    "no active replacement candidate in team"
);
