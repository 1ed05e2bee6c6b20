mod acting_user;
