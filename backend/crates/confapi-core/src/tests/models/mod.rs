mod archive_format;
mod backup_request;
mod queue_status;
mod tracking_id;
